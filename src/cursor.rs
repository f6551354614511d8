/* src/cursor.rs */

use crate::error::EofError;
use crate::sink::ByteSink;
use crate::uint::BeUint;

/// Sequential byte reader with bounds checking.
///
/// A `Cursor` borrows its buffer and tracks how many bytes have been
/// consumed. Every operation either succeeds completely or fails with
/// [`EofError`] and leaves the position, and any sink, untouched.
/// Zero-length requests always succeed.
///
/// ```
/// use binary_format::Cursor;
///
/// let mut cursor = Cursor::new(&[0x12, 0x34, 0x56, 0x78, 0x9A]);
/// assert_eq!(cursor.read_uint::<u32>().unwrap(), 0x1234_5678);
/// assert!(cursor.read_uint::<u16>().is_err());
/// assert_eq!(cursor.offset(), 4);
/// assert_eq!(cursor.read_uint::<u8>().unwrap(), 0x9A);
/// assert!(cursor.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor positioned at the start of `data`.
	#[must_use]
	pub fn new(data: &'a [u8]) -> Self {
		Self { data, pos: 0 }
	}

	/// Number of bytes consumed so far.
	#[must_use]
	pub fn offset(&self) -> usize {
		self.pos
	}

	/// Number of bytes not yet consumed.
	#[must_use]
	pub fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	/// Return `true` once every byte has been consumed.
	#[must_use]
	pub fn is_exhausted(&self) -> bool {
		self.remaining() == 0
	}

	/// The whole underlying buffer, regardless of position.
	#[must_use]
	pub fn as_slice(&self) -> &'a [u8] {
		self.data
	}

	/// The unread tail of the buffer. Does not advance.
	#[must_use]
	pub fn rest(&self) -> &'a [u8] {
		&self.data[self.pos..]
	}

	/// Advance past `n` bytes without copying them.
	///
	/// # Errors
	///
	/// Returns [`EofError`] when fewer than `n` bytes remain; the position
	/// is left unchanged.
	pub fn skip(&mut self, n: usize) -> Result<(), EofError> {
		self.take(n).map(|_| ())
	}

	/// Copy the next `n` bytes into `sink` and advance past them.
	///
	/// # Errors
	///
	/// Returns [`EofError`] when fewer than `n` bytes remain. Nothing is
	/// written to `sink` and the position is left unchanged.
	///
	/// # Panics
	///
	/// Panics if a fixed-size `sink` has room for fewer than `n` bytes.
	/// The position is only advanced after the sink accepted the bytes.
	///
	/// ```
	/// use binary_format::Cursor;
	///
	/// let mut cursor = Cursor::new(b"Python is cool");
	/// let mut buf = *b"0123456789";
	/// cursor.read_bytes(7, &mut buf).unwrap();
	/// assert_eq!(&buf, b"Python 789");
	///
	/// let mut out = Vec::<u8>::new();
	/// cursor.read_bytes(3, &mut out).unwrap();
	/// assert_eq!(out, b"is ");
	/// ```
	pub fn read_bytes<S>(&mut self, n: usize, sink: &mut S) -> Result<(), EofError>
	where
		S: ByteSink + ?Sized,
	{
		let bytes = self.peek(n)?;
		if !bytes.is_empty() {
			sink.put_slice(bytes);
		}
		self.pos += n;
		Ok(())
	}

	/// Borrow the next `n` bytes from the buffer and advance past them.
	///
	/// # Errors
	///
	/// Returns [`EofError`] when fewer than `n` bytes remain; the position
	/// is left unchanged.
	pub fn read_slice(&mut self, n: usize) -> Result<&'a [u8], EofError> {
		self.take(n)
	}

	/// Decode the next `T::WIDTH` bytes as a big-endian integer.
	///
	/// # Errors
	///
	/// Returns [`EofError`] when fewer than `T::WIDTH` bytes remain; the
	/// position is left unchanged.
	pub fn read_uint<T: BeUint>(&mut self) -> Result<T, EofError> {
		self.take(T::WIDTH).map(T::from_be_prefix)
	}

	/// Decode the next three bytes as a big-endian 24-bit integer.
	///
	/// # Errors
	///
	/// Returns [`EofError`] when fewer than three bytes remain; the position
	/// is left unchanged.
	pub fn read_u24(&mut self) -> Result<u32, EofError> {
		let b = self.take(3)?;
		Ok(u32::from_be_bytes([0, b[0], b[1], b[2]]))
	}

	fn peek(&self, n: usize) -> Result<&'a [u8], EofError> {
		let have = self.remaining();
		if have < n {
			return Err(EofError { need: n, have });
		}
		Ok(&self.data[self.pos..self.pos + n])
	}

	fn take(&mut self, n: usize) -> Result<&'a [u8], EofError> {
		let slice = self.peek(n)?;
		self.pos += n;
		Ok(slice)
	}
}
