//! Static file fallback search

mod rule;

pub use rule::{RuleFallback, BASE_AREA};
