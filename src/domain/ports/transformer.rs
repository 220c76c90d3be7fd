//! Transformer ports - preprocessing steps and the pool that orders them

use std::sync::Arc;

use crate::domain::entities::TransformationChain;

/// One preprocessing step
///
/// A step may rewrite the chain's content, target content type and target
/// path. Returning an error aborts the remaining steps.
pub trait Transformer: Send + Sync {
    /// Name used in logs and error messages
    fn name(&self) -> &str;

    fn process(&self, chain: &mut TransformationChain) -> anyhow::Result<()>;
}

/// Resolves the ordered steps for a content type conversion
pub trait TransformerPool: Send + Sync {
    /// Steps to run, in order, for `(orig_type, target_type)`
    fn transformers(&self, orig_type: &str, target_type: &str) -> Vec<Arc<dyn Transformer>>;
}
