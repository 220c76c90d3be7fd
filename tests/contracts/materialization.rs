//! Materialization contracts
//!
//! Only a changed chain writes, and it always writes to
//! `<var>/<materialization dir>/source/<target asset path>`.

use std::sync::Barrier;
use std::thread;

use assetry::{AssetReference, CachedLocation, DirectContext, DirectoryCode};

use crate::common::*;

#[test]
fn contract_unchanged_chain_never_writes() {
    let env = TestEnv::new();
    env.write("web/plain.css", PLAIN_CSS);
    let service = env.service();
    let asset = AssetReference::new("web/plain.css", DirectContext::new(DirectoryCode::root()));

    let location = service.pre_process(&asset).unwrap().unwrap();

    assert_eq!(location, CachedLocation::new(DirectoryCode::root(), "web/plain.css"));
    assert!(env.list_files("var/view_preprocessed").is_empty());
}

#[test]
fn contract_changed_chain_writes_under_var_source() {
    let env = TestEnv::new();
    env.write("web/brand.css", BRANDED_CSS);
    let service = env.service();
    let asset = AssetReference::new("web/brand.css", DirectContext::new(DirectoryCode::root()));

    let location = service.pre_process(&asset).unwrap().unwrap();

    assert_eq!(location.directory(), &DirectoryCode::var());
    assert_eq!(location.path(), "view_preprocessed/source/web/brand.css");
    assert_eq!(
        env.list_files("var/view_preprocessed"),
        vec!["source/web/brand.css"]
    );
}

#[test]
fn contract_rematerialization_is_byte_identical() {
    let env = TestEnv::new();
    env.write("web/brand.css", BRANDED_CSS);
    let asset = AssetReference::new("web/brand.css", DirectContext::new(DirectoryCode::root()));

    let mut config = env.config();
    config.cache.backend = assetry::config::CacheBackend::Memory;
    let first = env.service_with(config.clone()).get_content(&asset).unwrap();
    let second = env.service_with(config).get_content(&asset).unwrap();

    assert_eq!(first, second);
}

#[test]
fn contract_source_files_are_never_modified() {
    let env = TestEnv::new();
    env.write("web/brand.css", BRANDED_CSS);
    let service = env.service();
    let asset = AssetReference::new("web/brand.css", DirectContext::new(DirectoryCode::root()));

    service.get_file(&asset).unwrap();

    assert_eq!(env.read("web/brand.css"), BRANDED_CSS);
}

#[test]
fn contract_concurrent_misses_leave_one_complete_file() {
    const WORKERS: usize = 8;

    let env = TestEnv::new();
    env.write("web/brand.css", BRANDED_CSS);
    let asset = AssetReference::new("web/brand.css", DirectContext::new(DirectoryCode::root()));
    let barrier = Barrier::new(WORKERS);

    let outputs: Vec<Vec<u8>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..WORKERS)
            .map(|_| {
                scope.spawn(|| {
                    let service = env.service();
                    barrier.wait();
                    let path = service.get_file(&asset).unwrap().unwrap();
                    std::fs::read(path).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let expected = BRANDED_CSS.replace("{{brand}}", "#c00").into_bytes();
    assert!(outputs.iter().all(|bytes| *bytes == expected));
    assert_eq!(
        env.list_files("var/view_preprocessed"),
        vec!["source/web/brand.css"]
    );
    assert_eq!(
        std::fs::read(env.path("var/view_preprocessed/source/web/brand.css")).unwrap(),
        expected
    );
}
