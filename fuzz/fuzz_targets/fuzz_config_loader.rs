#![no_main]

use std::path::Path;

use compatcheck::config::{DocumentFormat, parse_config};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Only panics matter; parse failures are expected
        let _ = parse_config(text, DocumentFormat::Json, Path::new("fuzz.json"));
        let _ = parse_config(text, DocumentFormat::Yaml, Path::new("fuzz.yaml"));
    }
});
