/* demos/probe_records.rs */

#![allow(missing_docs)]

use binary_format::{Cursor, Error, decode_unsigned};

fn main() {
	// Two full 6-byte records and a truncated third one.
	let data = [
		0x00, 0x01, 0x00, 0x00, 0x00, 0x2A, //
		0x00, 0x02, 0x00, 0x00, 0x01, 0x00, //
		0x00, 0x03, 0x00,
	];

	if let Err(e) = dump(&data) {
		eprintln!("Decode error: {e}");
	}
}

fn dump(data: &[u8]) -> Result<(), Error> {
	let mut cursor = Cursor::new(data);

	// A failed read consumes nothing, so probing for a whole record and
	// stopping on error leaves the cursor at the start of the partial one.
	while let Ok(record) = cursor.read_slice(6) {
		let id: u16 = decode_unsigned(&record[..2], true)?;
		let value: u32 = decode_unsigned(&record[2..], true)?;
		println!("record {id}: {value}");
	}
	println!(
		"stopped at offset {} with {} bytes left",
		cursor.offset(),
		cursor.remaining()
	);
	Ok(())
}
