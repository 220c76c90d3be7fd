//! Property tests for cache keys and cached values.

use proptest::prelude::*;

use assetry::{CacheKey, CachedLocation, DirectoryCode};

fn relative_path_string() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,16}").unwrap();
    proptest::collection::vec(segment, 1..=5).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: keys are deterministic and keep both halves intact.
    #[test]
    fn property_cache_key_is_deterministic(
        source in relative_path_string(),
        logical in relative_path_string(),
    ) {
        let key = CacheKey::new(&source, &logical);
        let again = CacheKey::new(&source, &logical);
        prop_assert_eq!(key.as_str(), again.as_str());
        prop_assert_eq!(key.as_str(), format!("{}:{}", source, logical));
    }

    /// PROPERTY: a stored location decodes back to itself.
    #[test]
    fn property_cached_location_survives_storage(
        dir in "[a-z_]{1,8}",
        path in relative_path_string(),
    ) {
        let location = CachedLocation::new(DirectoryCode::new(dir), path);
        let decoded = CachedLocation::decode(&location.encode());
        prop_assert_eq!(decoded, Ok(location));
    }

    /// PROPERTY: decoding arbitrary cache bytes never panics.
    #[test]
    fn property_decode_never_panics(raw in ".{0,200}") {
        let _ = CachedLocation::decode(&raw);
    }
}
