#![no_main]

use std::path::Path;

use compatcheck::config::{ConfigDocument, parse_matrix, validate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(matrix) = parse_matrix(text, Path::new("fuzz.json")) {
            // Every property is missing from an empty config
            let issues = validate(&ConfigDocument::new(), &matrix);
            assert_eq!(issues.len(), matrix.len());
        }
    }
});
