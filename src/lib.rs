/* src/lib.rs */

//! Bounds-checked sequential reader for big-endian binary formats.
//!
//! Two building blocks:
//!
//! - [`decode_unsigned`] turns a byte run into a big-endian unsigned
//!   integer, optionally insisting that the run is exactly as wide as the
//!   integer.
//! - [`Cursor`] walks a borrowed buffer with [`skip`](Cursor::skip),
//!   [`read_bytes`](Cursor::read_bytes) and
//!   [`read_uint`](Cursor::read_uint).
//!
//! Cursor operations are all-or-nothing: a request that does not fit in
//! the remaining bytes returns [`EofError`] without consuming anything,
//! so callers can probe for optional trailing data and retry with a
//! smaller size.
//!
//! ```
//! use binary_format::Cursor;
//!
//! let data = [0x00, 0x03, b'a', b'b', b'c', 0xFF];
//! let mut cursor = Cursor::new(&data);
//! let len = cursor.read_uint::<u16>().unwrap() as usize;
//! let mut name = Vec::<u8>::new();
//! cursor.read_bytes(len, &mut name).unwrap();
//! assert_eq!(name, b"abc");
//! assert_eq!(cursor.remaining(), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod cursor;
mod error;
mod sink;
mod uint;

pub use crate::cursor::Cursor;
pub use crate::error::{EofError, Error};
pub use crate::sink::{ByteSink, Overwrite};
pub use crate::uint::{BeUint, decode_unsigned};
