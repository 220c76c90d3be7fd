//! Theme discovery

mod design;

pub use design::{DesignThemeList, THEME_MANIFEST};
