/* src/uint.rs */

use core::mem::size_of;

use crate::error::{EofError, Error};

mod sealed {
	#[allow(unreachable_pub)]
	pub trait Sealed {}
}

/// An unsigned integer that can be decoded from big-endian bytes.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `u128`. The trait is
/// sealed so that [`WIDTH`](Self::WIDTH) always matches the bytes
/// [`Cursor::read_uint`](crate::Cursor::read_uint) hands to the decoder.
///
/// ```compile_fail
/// use binary_format::BeUint;
///
/// #[derive(Clone, Copy)]
/// struct Wide(u32);
///
/// impl BeUint for Wide {
/// 	const WIDTH: usize = 1;
/// 	fn from_be_prefix(bytes: &[u8]) -> Self {
/// 		Wide(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
/// 	}
/// }
/// ```
pub trait BeUint: sealed::Sealed + Copy {
	/// Encoded width in bytes.
	const WIDTH: usize;

	/// Decode the first [`WIDTH`](Self::WIDTH) bytes of `bytes`, most
	/// significant byte first.
	///
	/// # Panics
	///
	/// Panics if `bytes` is shorter than [`WIDTH`](Self::WIDTH). Use
	/// [`decode_unsigned`] for a checked version.
	#[doc(hidden)]
	fn from_be_prefix(bytes: &[u8]) -> Self;
}

macro_rules! impl_be_uint {
	($($ty:ty),* $(,)?) => {
		$(
			impl sealed::Sealed for $ty {}

			impl BeUint for $ty {
				const WIDTH: usize = size_of::<$ty>();

				#[inline]
				fn from_be_prefix(bytes: &[u8]) -> Self {
					let mut buf = [0u8; size_of::<$ty>()];
					buf.copy_from_slice(&bytes[..size_of::<$ty>()]);
					Self::from_be_bytes(buf)
				}
			}
		)*
	};
}

impl_be_uint!(u8, u16, u32, u64, u128);

/// Decode a big-endian unsigned integer from the front of `bytes`.
///
/// Bytes past the integer width are ignored unless `strict` is set, in
/// which case `bytes` must be exactly as long as the width.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] when `strict` is set and the length
/// differs from the width (shorter or longer). Otherwise returns
/// [`Error::Eof`] when `bytes` is shorter than the width.
///
/// ```
/// use binary_format::decode_unsigned;
///
/// let data = [0x74, 0x91, 0xb2, 0x03];
/// assert_eq!(decode_unsigned::<u32>(&data, false).unwrap(), 1_955_705_347);
/// assert_eq!(decode_unsigned::<u8>(&data, false).unwrap(), 0x74);
/// assert!(decode_unsigned::<u8>(&data, true).unwrap_err().is_usage());
/// ```
pub fn decode_unsigned<T: BeUint>(bytes: &[u8], strict: bool) -> Result<T, Error> {
	if strict && bytes.len() != T::WIDTH {
		return Err(Error::LengthMismatch {
			expected: T::WIDTH,
			actual: bytes.len(),
		});
	}
	if bytes.len() < T::WIDTH {
		return Err(
			EofError {
				need: T::WIDTH,
				have: bytes.len(),
			}
			.into(),
		);
	}
	Ok(T::from_be_prefix(bytes))
}
