//! `{{name}}` placeholder substitution

use std::borrow::Cow;
use std::collections::BTreeMap;

use regex::{Captures, Regex};

use crate::domain::entities::TransformationChain;
use crate::domain::ports::Transformer;

const PLACEHOLDER: &str = r"\{\{\s*([A-Za-z0-9_.\-]+)\s*\}\}";

pub struct VariableNotation {
    pattern: Regex,
    variables: BTreeMap<String, String>,
}

impl VariableNotation {
    pub const NAME: &'static str = "variables";

    pub fn new(variables: BTreeMap<String, String>) -> anyhow::Result<Self> {
        Ok(Self {
            pattern: Regex::new(PLACEHOLDER)?,
            variables,
        })
    }

    /// Replace known placeholders in `content`, leaving unknown ones as-is
    pub fn substitute<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(content, |caps: &Captures<'_>| {
            match self.variables.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
    }
}

impl Transformer for VariableNotation {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn process(&self, chain: &mut TransformationChain) -> anyhow::Result<()> {
        let Some(content) = chain.content_str() else {
            tracing::debug!(asset = %chain.orig_asset_path(), "skipping variables on binary content");
            return Ok(());
        };
        let updated = match self.substitute(content) {
            Cow::Owned(updated) => updated,
            Cow::Borrowed(_) => return Ok(()),
        };
        chain.set_content(updated);
        Ok(())
    }
}
