#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Section lookup slices by byte offsets, so non-ASCII text matters here
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = emapconv::parser::parse_emap(text);
    }
});
