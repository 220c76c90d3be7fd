//! Failure contracts
//!
//! Failed attempts leave no cache entry and no materialized file.

use assetry::config::PROJECT_CONFIG_FILE;
use assetry::{
    AppMode, AssetReference, DirectContext, DirectoryCode, FallbackContext, RemoteContext,
    SourceError,
};

use crate::common::*;

#[test]
fn contract_incompatible_type_in_developer_mode_caches_nothing() {
    let env = TestEnv::new();
    env.write(
        PROJECT_CONFIG_FILE,
        "[preprocess]\nmode = \"developer\"\n\n[[preprocess.pipelines]]\nsource_type = \"less\"\nsteps = [\"retype:css\"]\n",
    );
    env.write("web/a.less", ".a{}");
    let service = env.service();
    let asset = AssetReference::new("web/a.less", DirectContext::new(DirectoryCode::root()));

    let err = service.pre_process(&asset).unwrap_err();

    assert!(matches!(err, SourceError::InvalidChainState(_)));
    assert!(env.list_files("var").is_empty());
}

#[test]
fn contract_declared_type_change_passes_in_developer_mode() {
    let env = TestEnv::new();
    let mut config = env.config();
    config.preprocess.mode = AppMode::Developer;
    env.write("web/a.less", ".a{}");
    let service = env.service_with(config);
    let asset = AssetReference::new("web/a.less", DirectContext::new(DirectoryCode::root()));

    let location = service.pre_process(&asset).unwrap().unwrap();

    assert_eq!(location.path(), "view_preprocessed/source/web/a.css");
}

#[test]
fn contract_remote_context_is_unsupported() {
    let env = TestEnv::new();
    let service = env.service();
    let asset = AssetReference::new("a.css", RemoteContext::new("https://cdn.test"));

    let err = service.get_file(&asset).unwrap_err();

    assert!(matches!(err, SourceError::UnsupportedContext { kind: "remote" }));
}

#[test]
fn contract_traversal_is_rejected_before_io() {
    let env = TestEnv::new();
    env.write("secret.txt", "nope");
    let service = env.service();
    let asset = AssetReference::new(
        "../secret.txt",
        DirectContext::new(DirectoryCode::root()).with_context_path("web"),
    );

    let err = service.get_content(&asset).unwrap_err();

    assert!(matches!(err, SourceError::MalformedPath(_)));
}

#[test]
fn contract_unknown_directory_is_an_error() {
    let env = TestEnv::new();
    let service = env.service();
    let asset = AssetReference::new("a.css", DirectContext::new(DirectoryCode::new("media")));

    let err = service.get_file(&asset).unwrap_err();

    assert!(matches!(err, SourceError::Filesystem(_)));
}

#[test]
fn contract_theme_path_cannot_escape_var() {
    let env = TestEnv::new();
    env.write("lib/web/a.less", ".a{}");
    let service = env.service();
    let asset = AssetReference::new(
        "a.less",
        FallbackContext::new("frontend", "../../../../../escaped", "en_US"),
    );

    let err = service.get_file(&asset).unwrap_err();

    assert!(matches!(err, SourceError::MalformedPath(_)));
    assert!(env.list_files("var").is_empty());
    assert!(!env.project_root.path().join("../escaped").exists());
}
