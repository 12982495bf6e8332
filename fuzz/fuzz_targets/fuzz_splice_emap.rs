#![no_main]

use emapconv::{FileFormat, Model, SerializeMode};
use libfuzzer_sys::fuzz_target;

const BOX_OBJ: &str = "o Box\nv 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n";

fuzz_target!(|data: &[u8]| {
    let Ok(existing) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(model) = Model::parse("box", BOX_OBJ, FileFormat::Obj) else {
        return;
    };

    for mode in [SerializeMode::Append, SerializeMode::Overwrite] {
        let _ = emapconv::writer::emap::splice_brushes(existing, &model, mode);
    }
});
