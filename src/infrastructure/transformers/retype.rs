//! Content type change declaration

use crate::domain::entities::TransformationChain;
use crate::domain::ports::Transformer;

/// Declares that the chain's output has content type `to`
///
/// The content itself is left alone; a compiling step is expected to run
/// before or after this one.
pub struct Retype {
    to: String,
    name: String,
}

impl Retype {
    pub const PREFIX: &'static str = "retype:";

    pub fn new(to: impl Into<String>) -> Self {
        let to = to.into();
        Self {
            name: format!("{}{}", Self::PREFIX, to),
            to,
        }
    }
}

impl Transformer for Retype {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, chain: &mut TransformationChain) -> anyhow::Result<()> {
        chain.set_content_type(self.to.as_str());
        Ok(())
    }
}
