//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the source service with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Usage
//!
//! ```ignore
//! use assetry::presentation::factory;
//!
//! let service = factory::create_source_service(&config, project_dir)?;
//! let file = service.get_file(&asset)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use factory::create_source_service;
