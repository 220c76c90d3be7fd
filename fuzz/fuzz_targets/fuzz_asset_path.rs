#![no_main]

use libfuzzer_sys::fuzz_target;

use assetry::domain::value_objects::assert_file_path_format;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        if assert_file_path_format(path).is_ok() {
            assert!(!path.starts_with('/'));
            assert!(path.split('/').all(|s| !s.is_empty() && s != "." && s != ".."));
        }
    }
});
