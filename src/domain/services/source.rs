//! Source service
//!
//! Turns a logical asset reference into a readable file:
//!
//! 1. resolve the physical source file (fallback search or direct join)
//! 2. look up the memoized result under `<relative source path>:<logical path>`
//! 3. on a miss, run the preprocessing steps registered for the source's
//!    content type, materialize the output if it changed, and memoize
//!
//! A missing source file is not an error: every public operation returns
//! `Ok(None)`. Configuration and programming errors (unsupported context,
//! malformed path, invalid chain) and step failures are returned as
//! [`SourceError`] and nothing is cached for that attempt.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::entities::{
    AssetContext, AssetReference, ChainError, DirectContext, FallbackContext, TransformationChain,
};
use crate::domain::ports::{
    Filesystem, FsError, PreprocessCache, StaticFileFallback, ThemeList, TransformerPool,
};
use crate::domain::value_objects::{
    assert_file_path_format, content_type_of, AppMode, CacheKey, CachedLocation, DirectoryCode,
    PathError,
};

/// Default directory (inside the var directory) for materialized files
pub const DEFAULT_MATERIALIZATION_DIR: &str = "tmp";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("support for {kind} asset contexts is not implemented")]
    UnsupportedContext { kind: &'static str },

    #[error("invalid preprocessing result: {0}")]
    InvalidChainState(#[from] ChainError),

    #[error("malformed asset path: {0}")]
    MalformedPath(#[from] PathError),

    #[error("preprocessing step '{step}' failed for '{asset_path}': {source}")]
    Transformer {
        step: String,
        asset_path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    Filesystem(#[from] FsError),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Preprocessing and materialization service for local assets
pub struct SourceService {
    filesystem: Arc<dyn Filesystem>,
    cache: Arc<dyn PreprocessCache>,
    pool: Arc<dyn TransformerPool>,
    fallback: Arc<dyn StaticFileFallback>,
    themes: Arc<dyn ThemeList>,
    mode: AppMode,
    materialization_dir: String,
    compatible_types: BTreeMap<String, String>,
}

impl SourceService {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        cache: Arc<dyn PreprocessCache>,
        pool: Arc<dyn TransformerPool>,
        fallback: Arc<dyn StaticFileFallback>,
        themes: Arc<dyn ThemeList>,
    ) -> Self {
        Self {
            filesystem,
            cache,
            pool,
            fallback,
            themes,
            mode: AppMode::default(),
            materialization_dir: DEFAULT_MATERIALIZATION_DIR.to_string(),
            compatible_types: BTreeMap::new(),
        }
    }

    pub fn with_mode(mut self, mode: AppMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_materialization_dir(mut self, dir: impl Into<String>) -> Self {
        self.materialization_dir = dir.into().trim_matches('/').to_string();
        self
    }

    pub fn with_compatible_types(mut self, compatible_types: BTreeMap<String, String>) -> Self {
        self.compatible_types = compatible_types;
        self
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Absolute path of the (possibly materialized) asset file
    pub fn get_file(&self, asset: &AssetReference) -> SourceResult<Option<PathBuf>> {
        let Some(location) = self.pre_process(asset)? else {
            return Ok(None);
        };
        let dir = self.filesystem.directory_read(location.directory())?;
        Ok(Some(dir.absolute_path(location.path())))
    }

    /// Content of the (possibly materialized) asset file
    pub fn get_content(&self, asset: &AssetReference) -> SourceResult<Option<Vec<u8>>> {
        let Some(location) = self.pre_process(asset)? else {
            return Ok(None);
        };
        let dir = self.filesystem.directory_read(location.directory())?;
        Ok(Some(dir.read_file(location.path())?))
    }

    /// Source file path relative to the root directory, without preprocessing
    pub fn find_relative_source_file_path(
        &self,
        asset: &AssetReference,
    ) -> SourceResult<Option<String>> {
        let Some(source_file) = self.find_source_file(asset)? else {
            return Ok(None);
        };
        let root = self.filesystem.directory_read(&DirectoryCode::root())?;
        Ok(Some(root.relative_path(&source_file)?))
    }

    /// Infer a content type from a path
    pub fn content_type(path: &str) -> String {
        content_type_of(path)
    }

    /// Resolve, preprocess and memoize `asset`
    ///
    /// Returns the directory and relative path the final file can be read
    /// from, or `None` when no source file exists.
    pub fn pre_process(&self, asset: &AssetReference) -> SourceResult<Option<CachedLocation>> {
        let Some(source_file) = self.find_source_file(asset)? else {
            return Ok(None);
        };

        let root = self.filesystem.directory_read(&DirectoryCode::root())?;
        let path = root.relative_path(&source_file)?;
        let key = CacheKey::new(&path, &asset.path());

        if let Some(location) = self.load_cached(&key) {
            tracing::debug!(key = %key, dir = %location.directory(), "preprocess cache hit");
            return Ok(Some(location));
        }
        tracing::debug!(key = %key, "preprocess cache miss");

        let content = root.read_file(&path)?;
        let content_type = Self::content_type(&path);
        let mut chain = TransformationChain::new(
            asset.clone(),
            content,
            content_type,
            path.clone(),
            self.mode,
        )
        .with_compatible_types(self.compatible_types.clone());

        let steps = self
            .pool
            .transformers(chain.orig_content_type(), chain.target_content_type());
        for step in &steps {
            tracing::trace!(step = step.name(), asset = %asset.path(), "running preprocessing step");
            step.process(&mut chain)
                .map_err(|source| SourceError::Transformer {
                    step: step.name().to_string(),
                    asset_path: asset.path(),
                    source: source.into(),
                })?;
        }

        let outcome = chain.finish()?;
        let location = if outcome.changed {
            assert_file_path_format(&outcome.asset_path)?;
            let materialized = format!(
                "{}/source/{}",
                self.materialization_dir, outcome.asset_path
            );
            self.filesystem
                .directory_write(&DirectoryCode::var())?
                .write_file(&materialized, &outcome.content)?;
            tracing::debug!(
                source = %path,
                target = %materialized,
                content_type = %outcome.content_type,
                "materialized preprocessed asset"
            );
            CachedLocation::new(DirectoryCode::var(), materialized)
        } else {
            CachedLocation::new(DirectoryCode::root(), path)
        };

        self.store_cached(&key, &location);
        Ok(Some(location))
    }

    fn find_source_file(&self, asset: &AssetReference) -> SourceResult<Option<PathBuf>> {
        match asset.context() {
            AssetContext::Fallback(ctx) => self.find_file_through_fallback(asset, ctx),
            AssetContext::Direct(ctx) => self.find_file(asset, ctx),
            AssetContext::Remote(_) => Err(SourceError::UnsupportedContext {
                kind: asset.context().kind(),
            }),
        }
    }

    fn find_file_through_fallback(
        &self,
        asset: &AssetReference,
        ctx: &FallbackContext,
    ) -> SourceResult<Option<PathBuf>> {
        // The theme path ends up in the materialized target path
        if !ctx.theme_path().is_empty() {
            assert_file_path_format(ctx.theme_path())?;
        }
        let theme = self.themes.theme_by_full_path(&ctx.theme_full_path());
        Ok(self.fallback.get_file(
            ctx.area(),
            theme.as_ref(),
            ctx.locale(),
            asset.file_path(),
            asset.module(),
        ))
    }

    fn find_file(
        &self,
        asset: &AssetReference,
        ctx: &DirectContext,
    ) -> SourceResult<Option<PathBuf>> {
        let dir = self.filesystem.directory_read(ctx.base_dir())?;
        assert_file_path_format(asset.file_path())?;
        let path = asset.path();
        assert_file_path_format(&path)?;
        if !dir.is_file(&path) {
            return Ok(None);
        }
        Ok(Some(dir.absolute_path(&path)))
    }

    /// Cache store failures and undecodable values degrade to a miss
    fn load_cached(&self, key: &CacheKey) -> Option<CachedLocation> {
        match self.cache.load(key.as_str()) {
            Ok(Some(raw)) => match CachedLocation::decode(&raw) {
                Ok(location) => Some(location),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "discarding undecodable cache entry");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "preprocess cache load failed, recomputing");
                None
            }
        }
    }

    fn store_cached(&self, key: &CacheKey, location: &CachedLocation) {
        if let Err(e) = self.cache.save(&location.encode(), key.as_str()) {
            tracing::warn!(key = %key, error = %e, "preprocess cache save failed");
        }
    }
}
