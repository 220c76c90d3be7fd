//! `Vendor_Module::path` references
//!
//! A reference is rewritten to the path of `<context path>/Vendor_Module/path`
//! relative to the directory of the asset being processed, so that a
//! stylesheet at `frontend/Vendor/theme/en_US/css/styles.css` referring to
//! `Acme_Cart::img/a.png` ends up with `../Acme_Cart/img/a.png`.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::domain::entities::TransformationChain;
use crate::domain::ports::Transformer;

const REFERENCE: &str = r"\b([A-Z][A-Za-z0-9]*_[A-Za-z0-9]+)::([A-Za-z0-9_.\-/]+)";

pub struct ModuleNotation {
    pattern: Regex,
}

impl ModuleNotation {
    pub const NAME: &'static str = "module-notation";

    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            pattern: Regex::new(REFERENCE)?,
        })
    }

    /// Rewrite references in `content` for an asset at `asset_path`
    /// served under `context_path`
    pub fn rewrite<'a>(&self, content: &'a str, context_path: &str, asset_path: &str) -> Cow<'a, str> {
        let asset_dir = match asset_path.rsplit_once('/') {
            Some((dir, _)) => dir,
            None => "",
        };
        self.pattern.replace_all(content, |caps: &Captures<'_>| {
            let target = [context_path, &caps[1], &caps[2]]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join("/");
            relative_path(asset_dir, &target)
        })
    }
}

/// Path to `to` as seen from directory `from`, both `/`-separated
pub fn relative_path(from: &str, to: &str) -> String {
    let from: Vec<&str> = from.split('/').filter(|s| !s.is_empty()).collect();
    let to: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();

    let common = from
        .iter()
        .zip(&to)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = std::iter::repeat("..").take(from.len() - common).collect();
    parts.extend(&to[common..]);
    parts.join("/")
}

impl Transformer for ModuleNotation {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn process(&self, chain: &mut TransformationChain) -> anyhow::Result<()> {
        let asset = chain.asset().clone();
        let Some(content) = chain.content_str() else {
            return Ok(());
        };
        let context_path = asset.context().path();
        let updated = match self.rewrite(content, &context_path, &asset.path()) {
            Cow::Owned(updated) => updated,
            Cow::Borrowed(_) => return Ok(()),
        };
        chain.set_content(updated);
        Ok(())
    }
}
