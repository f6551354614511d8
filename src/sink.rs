/* src/sink.rs */

use alloc::collections::{LinkedList, VecDeque};
use alloc::vec::Vec;
use core::mem::MaybeUninit;

/// Destination for bytes copied out of a [`Cursor`](crate::Cursor).
///
/// A sink accepts bytes sequentially at its current write position.
/// Slices and arrays are written from the front on every call, growable
/// collections append, and [`Overwrite`] resumes where its iterator
/// stopped.
///
/// `[MaybeUninit<u8>]` is accepted as a raw memory target. Reading it
/// back needs `unsafe`, which this crate forbids, so its contents are the
/// caller's responsibility.
pub trait ByteSink {
	/// Write all of `src` at the sink's write position, in order.
	///
	/// # Panics
	///
	/// Fixed-size sinks panic when they have room for fewer than
	/// `src.len()` bytes.
	fn put_slice(&mut self, src: &[u8]);
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
	#[inline]
	fn put_slice(&mut self, src: &[u8]) {
		(**self).put_slice(src);
	}
}

impl ByteSink for [u8] {
	#[inline]
	fn put_slice(&mut self, src: &[u8]) {
		self[..src.len()].copy_from_slice(src);
	}
}

impl<const N: usize> ByteSink for [u8; N] {
	#[inline]
	fn put_slice(&mut self, src: &[u8]) {
		self.as_mut_slice().put_slice(src);
	}
}

impl ByteSink for [MaybeUninit<u8>] {
	fn put_slice(&mut self, src: &[u8]) {
		for (slot, &b) in self[..src.len()].iter_mut().zip(src) {
			slot.write(b);
		}
	}
}

impl ByteSink for Vec<u8> {
	#[inline]
	fn put_slice(&mut self, src: &[u8]) {
		self.extend_from_slice(src);
	}
}

impl ByteSink for VecDeque<u8> {
	fn put_slice(&mut self, src: &[u8]) {
		self.extend(src);
	}
}

impl ByteSink for LinkedList<u8> {
	fn put_slice(&mut self, src: &[u8]) {
		self.extend(src);
	}
}

/// Sink that overwrites the bytes yielded by a mutable iterator.
///
/// Lets any container exposing `iter_mut()` receive bytes in place,
/// including non-contiguous ones such as [`LinkedList`].
///
/// ```
/// use std::collections::LinkedList;
/// use binary_format::{Cursor, Overwrite};
///
/// let mut list: LinkedList<u8> = [0; 4].into_iter().collect();
/// let mut cursor = Cursor::new(b"wxyz");
/// cursor.read_bytes(2, &mut Overwrite(list.iter_mut())).unwrap();
/// assert!(list.iter().eq(b"wx\0\0"));
/// ```
#[derive(Debug)]
pub struct Overwrite<I>(pub I);

impl<I> Overwrite<I> {
	/// Return the underlying iterator, positioned after the last byte
	/// written.
	#[must_use]
	pub fn into_inner(self) -> I {
		self.0
	}
}

impl<'s, I> ByteSink for Overwrite<I>
where
	I: Iterator<Item = &'s mut u8>,
{
	fn put_slice(&mut self, src: &[u8]) {
		for (written, &b) in src.iter().enumerate() {
			let Some(slot) = self.0.next() else {
				panic!("overwrite sink full after {written} of {} bytes", src.len());
			};
			*slot = b;
		}
	}
}
