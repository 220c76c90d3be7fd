//! Domain Services
//!
//! Orchestration over the domain ports. Services hold their collaborators as
//! trait objects and never touch concrete I/O themselves.

mod source;

pub use source::{SourceError, SourceResult, SourceService, DEFAULT_MATERIALIZATION_DIR};
