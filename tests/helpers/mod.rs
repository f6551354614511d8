/* tests/helpers/mod.rs */

/// The 14-byte ASCII text used by the byte-run tests.
pub(crate) const TEXT: &[u8] = b"Python is cool";

/// Eight bytes holding `0x12345678` followed by `0x9ABCDEF0`.
pub(crate) fn uint_words() -> Vec<u8> {
	hex::decode("123456789abcdef0").unwrap()
}

/// A small length-prefixed record stream.
///
/// Each record is a `u8` tag, a `u16` length and that many payload bytes.
/// The last record is cut short.
pub(crate) fn record_stream() -> Vec<u8> {
	let mut buf = Vec::new();
	push_record(&mut buf, 0x01, b"alpha");
	push_record(&mut buf, 0x02, b"");
	push_record(&mut buf, 0x03, b"gamma");
	buf.truncate(buf.len() - 2);
	buf
}

fn push_record(buf: &mut Vec<u8>, tag: u8, payload: &[u8]) {
	buf.push(tag);
	let len = payload.len() as u16;
	buf.push((len >> 8) as u8);
	buf.push(len as u8);
	buf.extend_from_slice(payload);
}
