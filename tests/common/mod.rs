//! Common test utilities for Assetry contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project tree with themes, modules and config
//! - Fixtures: Reusable asset content constants

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use fixtures::*;
