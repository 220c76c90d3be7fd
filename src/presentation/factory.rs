//! Service Factory
//!
//! Builds a [`SourceService`] with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::config::{CacheBackend, Config};
use crate::domain::ports::PreprocessCache;
use crate::domain::services::SourceService;
use crate::domain::value_objects::DirectoryCode;
use crate::error::AssetryResult;
use crate::infrastructure::{
    ConfiguredPool, DesignThemeList, FileCache, LocalFilesystem, MemoryCache, RuleFallback,
};

/// Create a source service from `config`
///
/// Relative directories in `config` are resolved against `base`, usually
/// the directory holding `assetry.toml`.
pub fn create_source_service(config: &Config, base: &Path) -> AssetryResult<SourceService> {
    config.validate()?;

    let root = config.root_dir(base);
    let filesystem = create_filesystem(config, base);
    let cache = create_cache(config, base);
    let pool = ConfiguredPool::from_config(&config.preprocess)?;

    let mut fallback = RuleFallback::new().with_modules(
        config
            .design
            .modules
            .iter()
            .map(|(name, dir)| (name.clone(), root.join(dir)))
            .collect(),
    );
    if let Some(lib_web) = &config.design.lib_web {
        fallback = fallback.with_lib_web(root.join(lib_web));
    }

    let themes = DesignThemeList::new(config.themes_dir(base));

    tracing::debug!(
        root = %root.display(),
        mode = %config.preprocess.mode,
        pipelines = pool.len(),
        "source service configured"
    );

    Ok(SourceService::new(
        Arc::new(filesystem),
        cache,
        Arc::new(pool),
        Arc::new(fallback),
        Arc::new(themes),
    )
    .with_mode(config.preprocess.mode)
    .with_materialization_dir(config.preprocess.materialization_dir.as_str())
    .with_compatible_types(config.preprocess.compatible_types.clone()))
}

/// Named directories: `base`, `var` and every `directories.extra` entry
pub fn create_filesystem(config: &Config, base: &Path) -> LocalFilesystem {
    let root = config.root_dir(base);
    config.directories.extra.iter().fold(
        LocalFilesystem::new(&root, config.var_dir(base)),
        |fs, (code, dir)| fs.with_directory(DirectoryCode::new(code.as_str()), root.join(dir)),
    )
}

pub fn create_cache(config: &Config, base: &Path) -> Arc<dyn PreprocessCache> {
    match config.cache.backend {
        CacheBackend::File => Arc::new(FileCache::new(config.cache_dir(base))),
        CacheBackend::Memory => Arc::new(MemoryCache::new()),
    }
}
