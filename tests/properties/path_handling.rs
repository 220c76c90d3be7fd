//! Property tests for asset path validation and relative references.

use proptest::prelude::*;

use assetry::domain::value_objects::assert_file_path_format;
use assetry::infrastructure::transformers::relative_path;

fn relative_path_string() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,12}").unwrap();
    proptest::collection::vec(segment, 1..=5)
        .prop_filter("no dot segments", |segments| {
            segments.iter().all(|s| s != "." && s != "..")
        })
        .prop_map(|segments| segments.join("/"))
}

/// Resolve `rel` against directory `dir`, collapsing `..`
fn resolve(dir: &str, rel: &str) -> String {
    let mut parts: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in rel.split('/') {
        match segment {
            ".." => {
                parts.pop();
            }
            "" | "." => {}
            other => parts.push(other),
        }
    }
    parts.join("/")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics on arbitrary input.
    #[test]
    fn property_validation_never_panics(input in ".{0,120}") {
        let _ = assert_file_path_format(&input);
    }

    /// PROPERTY: accepted paths are relative and free of traversal.
    #[test]
    fn property_accepted_paths_stay_relative(input in "[a-z./\\\\]{0,24}") {
        if assert_file_path_format(&input).is_ok() {
            prop_assert!(!input.starts_with('/'));
            prop_assert!(!input.contains('\\'));
            prop_assert!(input.split('/').all(|s| !s.is_empty() && s != "." && s != ".."));
        }
    }

    /// PROPERTY: well-formed relative paths are always accepted.
    #[test]
    fn property_plain_paths_are_accepted(path in relative_path_string()) {
        prop_assert!(assert_file_path_format(&path).is_ok());
    }

    /// PROPERTY: a rewritten module reference resolves back to its target.
    #[test]
    fn property_relative_reference_resolves_to_target(
        from in relative_path_string(),
        to in relative_path_string(),
    ) {
        let rel = relative_path(&from, &to);
        prop_assert_eq!(resolve(&from, &rel), to);
    }
}
