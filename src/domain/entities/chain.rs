//! Transformation chain
//!
//! Mutable state threaded through the preprocessing steps of one asset.
//! A chain is created fresh for each cache miss, handed to every step in
//! order, and consumed by [`TransformationChain::finish`], which validates it
//! and yields the final [`ChainOutcome`].

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::entities::AssetReference;
use crate::domain::value_objects::{with_content_type, AppMode};

/// A finished chain is in a state that must not be materialized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("target content type of '{asset_path}' is empty after preprocessing")]
    EmptyTargetType { asset_path: String },

    #[error(
        "content type of '{asset_path}' changed from '{from}' to '{to}', \
         which is not a declared compatible conversion"
    )]
    IncompatibleType {
        asset_path: String,
        from: String,
        to: String,
    },
}

/// What a finished chain produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutcome {
    pub content_type: String,
    pub asset_path: String,
    pub content: Vec<u8>,
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct TransformationChain {
    asset: AssetReference,
    orig_content: Vec<u8>,
    content: Vec<u8>,
    orig_content_type: String,
    target_content_type: String,
    orig_asset_path: String,
    target_asset_path: Option<String>,
    changed: bool,
    mode: AppMode,
    compatible_types: BTreeMap<String, String>,
}

impl TransformationChain {
    /// Seed a chain with the source file's content and content type
    ///
    /// `orig_asset_path` is the source file path relative to the root
    /// directory. The target content type starts equal to the original one.
    pub fn new(
        asset: AssetReference,
        orig_content: Vec<u8>,
        orig_content_type: impl Into<String>,
        orig_asset_path: impl Into<String>,
        mode: AppMode,
    ) -> Self {
        let orig_content_type = orig_content_type.into();
        Self {
            asset,
            content: orig_content.clone(),
            orig_content,
            target_content_type: orig_content_type.clone(),
            orig_content_type,
            orig_asset_path: orig_asset_path.into(),
            target_asset_path: None,
            changed: false,
            mode,
            compatible_types: BTreeMap::new(),
        }
    }

    /// Declare content type conversions (`from -> to`) accepted in strict mode
    pub fn with_compatible_types(mut self, compatible_types: BTreeMap<String, String>) -> Self {
        self.compatible_types = compatible_types;
        self
    }

    pub fn asset(&self) -> &AssetReference {
        &self.asset
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn orig_content(&self) -> &[u8] {
        &self.orig_content
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Current content as UTF-8, if it is valid text
    pub fn content_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    /// Replace the content; marks the chain changed if it differs
    pub fn set_content(&mut self, content: impl Into<Vec<u8>>) {
        let content = content.into();
        if content != self.content {
            self.changed = true;
        }
        self.content = content;
    }

    pub fn orig_content_type(&self) -> &str {
        &self.orig_content_type
    }

    pub fn target_content_type(&self) -> &str {
        &self.target_content_type
    }

    /// Change the target content type; marks the chain changed if it differs
    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        let content_type = content_type.into();
        if content_type != self.target_content_type {
            self.changed = true;
        }
        self.target_content_type = content_type;
    }

    /// Source file path relative to the root directory
    pub fn orig_asset_path(&self) -> &str {
        &self.orig_asset_path
    }

    /// Logical path the processed asset is materialized under
    ///
    /// Defaults to the asset's logical path, with the extension swapped for
    /// the target content type when that type changed.
    pub fn target_asset_path(&self) -> String {
        if let Some(path) = &self.target_asset_path {
            return path.clone();
        }
        let path = self.asset.path();
        if self.target_content_type != self.orig_content_type
            && !self.target_content_type.is_empty()
        {
            with_content_type(&path, &self.target_content_type)
        } else {
            path
        }
    }

    pub fn set_target_asset_path(&mut self, path: impl Into<String>) {
        self.target_asset_path = Some(path.into());
        self.changed = true;
    }

    pub fn mark_changed(&mut self) {
        self.changed = true;
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn assert_valid(&self) -> Result<(), ChainError> {
        if self.target_content_type.is_empty() {
            return Err(ChainError::EmptyTargetType {
                asset_path: self.asset.path(),
            });
        }

        if self.mode.is_strict() && self.target_content_type != self.orig_content_type {
            let declared = self.compatible_types.get(&self.orig_content_type);
            if declared.map(String::as_str) != Some(self.target_content_type.as_str()) {
                return Err(ChainError::IncompatibleType {
                    asset_path: self.asset.path(),
                    from: self.orig_content_type.clone(),
                    to: self.target_content_type.clone(),
                });
            }
        }

        Ok(())
    }

    /// Validate and consume the chain
    pub fn finish(self) -> Result<ChainOutcome, ChainError> {
        self.assert_valid()?;
        Ok(ChainOutcome {
            asset_path: self.target_asset_path(),
            content_type: self.target_content_type,
            content: self.content,
            changed: self.changed,
        })
    }
}
