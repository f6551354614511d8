/* demos/length_prefixed.rs */

#![allow(missing_docs)]

use binary_format::Cursor;

fn main() {
	let data = build_message();
	let mut cursor = Cursor::new(&data);

	let result = (|| {
		let version = cursor.read_uint::<u16>()?;
		let count = cursor.read_uint::<u8>()?;
		println!("version {version:#06x}, {count} entries");
		for _ in 0..count {
			let len = cursor.read_uint::<u8>()? as usize;
			let mut name = Vec::<u8>::with_capacity(len);
			cursor.read_bytes(len, &mut name)?;
			let value = cursor.read_u24()?;
			println!("  {}: {value}", String::from_utf8_lossy(&name));
		}
		Ok::<_, binary_format::EofError>(())
	})();

	match result {
		Ok(()) => println!("{} trailing bytes", cursor.remaining()),
		Err(e) => eprintln!("decode error at offset {}: {e}", cursor.offset()),
	}
}

fn build_message() -> Vec<u8> {
	let mut msg = vec![0x01, 0x00, 0x02];
	for (name, value) in [("width", 1920u32), ("height", 1080)] {
		msg.push(name.len() as u8);
		msg.extend_from_slice(name.as_bytes());
		msg.extend_from_slice(&value.to_be_bytes()[1..]);
	}
	msg
}
