#![no_main]

use emapconv::{ConverterConfig, parser, writer};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through the streaming OBJ reader
    let Ok(objects) = parser::parse_obj(Cursor::new(data), &ConverterConfig::default()) else {
        return;
    };

    // Whatever was accepted must also be writable
    let model = emapconv::Model::new("fuzz", "fuzz.obj", objects);
    let _ = writer::obj::write_obj(&model, None);
});
