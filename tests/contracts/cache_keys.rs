//! Cache key contracts
//!
//! The key of a memoized result is `<relative source path>:<logical path>`,
//! so the same source reached through two logical paths gets two entries and
//! two logical paths never share one by accident.

use std::sync::Arc;

use assetry::config::Config;
use assetry::domain::ports::PreprocessCache;
use assetry::infrastructure::{
    ConfiguredPool, DesignThemeList, LocalFilesystem, MemoryCache, RuleFallback,
};
use assetry::{AssetReference, CacheKey, DirectContext, DirectoryCode, FallbackContext, SourceService};

use crate::common::*;

/// Service over `env` with an inspectable memory cache
fn service_with_cache(env: &TestEnv) -> (SourceService, Arc<MemoryCache>) {
    let config = env.config();
    let base = env.project_root.path();
    let cache = Arc::new(MemoryCache::new());
    let root = config.root_dir(base);
    let service = SourceService::new(
        Arc::new(LocalFilesystem::new(&root, config.var_dir(base))),
        cache.clone(),
        Arc::new(ConfiguredPool::from_config(&config.preprocess).unwrap()),
        Arc::new(RuleFallback::new().with_lib_web(root.join("lib/web"))),
        Arc::new(DesignThemeList::new(config.themes_dir(base))),
    );
    (service, cache)
}

#[test]
fn contract_direct_key_joins_source_and_logical_path() {
    let env = TestEnv::new();
    env.write("web/a.css", PLAIN_CSS);
    let (service, cache) = service_with_cache(&env);
    let asset = AssetReference::new(
        "a.css",
        DirectContext::new(DirectoryCode::root()).with_context_path("web"),
    );

    service.pre_process(&asset).unwrap();

    assert!(cache.load("web/a.css:web/a.css").unwrap().is_some());
    assert_eq!(cache.len(), 1);
}

#[test]
fn contract_fallback_key_uses_resolved_source() {
    let env = TestEnv::with_themes();
    env.write("lib/web/jquery.js", JQUERY_JS);
    let (service, cache) = service_with_cache(&env);
    let asset = AssetReference::new("jquery.js", FallbackContext::new("frontend", SHOP_THEME, "en_US"));

    service.pre_process(&asset).unwrap();

    let key = CacheKey::new("lib/web/jquery.js", "frontend/Acme/shop/en_US/jquery.js");
    assert_eq!(key.as_str(), "lib/web/jquery.js:frontend/Acme/shop/en_US/jquery.js");
    assert!(cache.load(key.as_str()).unwrap().is_some());
}

#[test]
fn contract_two_logical_paths_two_entries() {
    let env = TestEnv::with_themes();
    env.write("lib/web/jquery.js", JQUERY_JS);
    let (service, cache) = service_with_cache(&env);

    for locale in ["en_US", "de_DE"] {
        let asset = AssetReference::new("jquery.js", FallbackContext::new("frontend", SHOP_THEME, locale));
        service.pre_process(&asset).unwrap();
    }

    assert_eq!(cache.len(), 2);
}

#[test]
fn contract_repeat_request_is_one_save() {
    let env = TestEnv::new();
    env.write("web/a.css", BRANDED_CSS);
    let (service, cache) = service_with_cache(&env);
    let asset = AssetReference::new("web/a.css", DirectContext::new(DirectoryCode::root()));

    let first = service.pre_process(&asset).unwrap();
    let second = service.pre_process(&asset).unwrap();

    assert_eq!(first, second);
    assert_eq!(cache.saves(), 1);
}

#[test]
fn contract_default_config_has_no_pipelines() {
    let pool = ConfiguredPool::from_config(&Config::default().preprocess).unwrap();
    assert!(pool.is_empty());
}
