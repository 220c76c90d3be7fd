//! Domain Entities
//!
//! - `AssetReference` - a logical asset and its resolution context
//! - `TransformationChain` - per-attempt preprocessing state
//! - `Theme` - a design theme with its ancestors

mod asset;
mod chain;
mod theme;

pub use asset::{AssetContext, AssetReference, DirectContext, FallbackContext, RemoteContext};
pub use chain::{ChainError, ChainOutcome, TransformationChain};
pub use theme::Theme;
