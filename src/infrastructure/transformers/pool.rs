//! Configured transformer pool
//!
//! Pipelines are keyed by source content type and an optional target type.
//! A lookup for `(orig, target)` prefers an exact pipeline and falls back to
//! the one registered for `orig` without a target.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::{ConfigError, PreprocessConfig};
use crate::domain::ports::{Transformer, TransformerPool};

use super::{ModuleNotation, Retype, VariableNotation};

type PipelineKey = (String, Option<String>);

#[derive(Default)]
pub struct ConfiguredPool {
    pipelines: BTreeMap<PipelineKey, Vec<Arc<dyn Transformer>>>,
}

impl ConfiguredPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the steps for a source type and optional target
    pub fn register(
        &mut self,
        source_type: impl Into<String>,
        target_type: Option<String>,
        steps: Vec<Arc<dyn Transformer>>,
    ) {
        self.pipelines
            .insert((source_type.into(), target_type), steps);
    }

    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    /// Build every configured pipeline, failing on unknown step names
    pub fn from_config(config: &PreprocessConfig) -> Result<Self, ConfigError> {
        let variables: Arc<dyn Transformer> = Arc::new(
            VariableNotation::new(config.variables.clone()).map_err(|e| ConfigError::Invalid {
                message: format!("variables step: {}", e),
            })?,
        );
        let module_notation: Arc<dyn Transformer> =
            Arc::new(ModuleNotation::new().map_err(|e| ConfigError::Invalid {
                message: format!("module-notation step: {}", e),
            })?);

        let mut pool = Self::new();
        for pipeline in &config.pipelines {
            let source_type = pipeline.source_type.trim().to_ascii_lowercase();
            if source_type.is_empty() {
                return Err(ConfigError::Invalid {
                    message: "pipeline source_type must not be empty".to_string(),
                });
            }

            let steps = pipeline
                .steps
                .iter()
                .map(|step| match step.as_str() {
                    VariableNotation::NAME => Ok(Arc::clone(&variables)),
                    ModuleNotation::NAME => Ok(Arc::clone(&module_notation)),
                    other => match other.strip_prefix(Retype::PREFIX) {
                        Some(to) if !to.is_empty() => {
                            Ok(Arc::new(Retype::new(to)) as Arc<dyn Transformer>)
                        }
                        _ => Err(ConfigError::UnknownStep {
                            step: other.to_string(),
                            source_type: source_type.clone(),
                        }),
                    },
                })
                .collect::<Result<Vec<_>, _>>()?;

            let target_type = pipeline
                .target_type
                .as_deref()
                .map(|t| t.trim().to_ascii_lowercase());
            tracing::debug!(
                source_type = %source_type,
                target_type = target_type.as_deref().unwrap_or("*"),
                steps = steps.len(),
                "registered preprocessing pipeline"
            );
            pool.register(source_type, target_type, steps);
        }
        Ok(pool)
    }
}

impl TransformerPool for ConfiguredPool {
    fn transformers(&self, orig_type: &str, target_type: &str) -> Vec<Arc<dyn Transformer>> {
        let exact = (orig_type.to_string(), Some(target_type.to_string()));
        let any = (orig_type.to_string(), None);
        self.pipelines
            .get(&exact)
            .or_else(|| self.pipelines.get(&any))
            .cloned()
            .unwrap_or_default()
    }
}
