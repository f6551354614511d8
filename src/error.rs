/* src/error.rs */

/// A read or decode asked for more bytes than are available.
///
/// Nothing is consumed when this is returned, so the caller may retry
/// with a smaller request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unexpected end of buffer: need {need} bytes, have {have}")]
pub struct EofError {
	/// Bytes the request required.
	pub need: usize,
	/// Bytes that were available.
	pub have: usize,
}

/// Errors produced by [`decode_unsigned`](crate::decode_unsigned).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// The input run is shorter than the integer width.
	#[error(transparent)]
	Eof(#[from] EofError),

	/// Strict decoding was requested but the input length is not exactly
	/// the integer width. This is a caller bug, not a truncated buffer.
	#[error("strict decode expects exactly {expected} bytes, got {actual}")]
	LengthMismatch {
		/// Width of the requested integer in bytes.
		expected: usize,
		/// Length of the input run.
		actual: usize,
	},
}

impl Error {
	/// Return `true` for end-of-buffer failures.
	#[must_use]
	pub fn is_eof(&self) -> bool {
		matches!(self, Self::Eof(_))
	}

	/// Return `true` for caller contract violations.
	#[must_use]
	pub fn is_usage(&self) -> bool {
		matches!(self, Self::LengthMismatch { .. })
	}
}
