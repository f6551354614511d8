/* tests/decode.rs */

#![allow(missing_docs)]

use binary_format::{BeUint, EofError, Error, decode_unsigned};

#[test]
fn endianness() {
	let data = hex::decode("7491b203").unwrap();
	assert_eq!(decode_unsigned::<u32>(&data, false).unwrap(), 1_955_705_347);
	assert_eq!(decode_unsigned::<u16>(&data, false).unwrap(), 0x7491);
	assert_eq!(decode_unsigned::<u8>(&data, false).unwrap(), 0x74);
}

#[test]
fn strict_mismatch_is_usage_error() {
	let seven = hex::decode("00000000121463").unwrap();
	let err = decode_unsigned::<u64>(&seven, true).unwrap_err();
	assert!(err.is_usage());
	assert_eq!(
		err,
		Error::LengthMismatch {
			expected: 8,
			actual: 7,
		}
	);

	let eight = hex::decode("000000001214631e").unwrap();
	assert_eq!(decode_unsigned::<u64>(&eight, true).unwrap(), 0x1214_631e);
}

#[test]
fn strict_rejects_oversized_runs() {
	let five = hex::decode("0000000012").unwrap();
	assert_eq!(decode_unsigned::<u32>(&five, false).unwrap(), 0);
	assert!(decode_unsigned::<u32>(&five, true).unwrap_err().is_usage());
}

#[test]
fn undersized_non_strict_is_eof() {
	let three = hex::decode("abcdef").unwrap();
	assert_eq!(
		decode_unsigned::<u32>(&three, false),
		Err(Error::Eof(EofError { need: 4, have: 3 }))
	);
}

#[test]
fn widths() {
	assert_eq!(u8::WIDTH, 1);
	assert_eq!(u16::WIDTH, 2);
	assert_eq!(u32::WIDTH, 4);
	assert_eq!(u64::WIDTH, 8);
	assert_eq!(u128::WIDTH, 16);
}

#[test]
fn eof_propagates_through_question_mark() {
	fn header(data: &[u8]) -> Result<(u16, u32), Error> {
		let mut r = binary_format::Cursor::new(data);
		let kind = r.read_uint::<u16>()?;
		let rest = r.read_slice(4)?;
		Ok((kind, decode_unsigned(rest, true)?))
	}

	let ok = hex::decode("0001deadbeef").unwrap();
	assert_eq!(header(&ok).unwrap(), (1, 0xDEAD_BEEF));
	let short = hex::decode("0001dead").unwrap();
	assert!(header(&short).unwrap_err().is_eof());
}
