#![no_main]

use libfuzzer_sys::fuzz_target;

use assetry::CachedLocation;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Anything that decodes must re-encode to an equal value
        if let Ok(location) = CachedLocation::decode(raw) {
            assert_eq!(CachedLocation::decode(&location.encode()), Ok(location));
        }
    }
});
