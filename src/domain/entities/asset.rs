//! Asset reference entity
//!
//! A logical, context-scoped reference to a static file. The context decides
//! how the reference is resolved to a physical source file:
//!
//! - [`FallbackContext`]: area/theme/locale, resolved by searching theme,
//!   module and library locations in priority order
//! - [`DirectContext`]: a fixed base directory, resolved by a direct join
//! - [`RemoteContext`]: an asset served from a remote base URL; there is no
//!   local source file to resolve

use crate::domain::value_objects::DirectoryCode;

/// Design context: area, theme and locale
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FallbackContext {
    area: String,
    theme_path: String,
    locale: String,
}

impl FallbackContext {
    pub fn new(
        area: impl Into<String>,
        theme_path: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            area: area.into(),
            theme_path: theme_path.into(),
            locale: locale.into(),
        }
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn theme_path(&self) -> &str {
        &self.theme_path
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Key the theme is registered under: `<area>/<theme path>`
    pub fn theme_full_path(&self) -> String {
        format!("{}/{}", self.area, self.theme_path)
    }

    /// `<area>[/<theme path>]/<locale>`
    pub fn path(&self) -> String {
        let mut path = self.area.clone();
        if !self.theme_path.is_empty() {
            path.push('/');
            path.push_str(&self.theme_path);
        }
        path.push('/');
        path.push_str(&self.locale);
        path
    }
}

/// Fixed base directory context
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectContext {
    base_dir: DirectoryCode,
    context_path: String,
}

impl DirectContext {
    pub fn new(base_dir: DirectoryCode) -> Self {
        Self {
            base_dir,
            context_path: String::new(),
        }
    }

    /// Prefix prepended to the logical path of every asset in this context
    pub fn with_context_path(mut self, context_path: impl Into<String>) -> Self {
        self.context_path = context_path.into();
        self
    }

    pub fn base_dir(&self) -> &DirectoryCode {
        &self.base_dir
    }

    pub fn path(&self) -> &str {
        &self.context_path
    }
}

/// Remote URL context
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteContext {
    base_url: String,
}

impl RemoteContext {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Resolution context of an asset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetContext {
    Fallback(FallbackContext),
    Direct(DirectContext),
    Remote(RemoteContext),
}

impl AssetContext {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            AssetContext::Fallback(_) => "fallback",
            AssetContext::Direct(_) => "direct",
            AssetContext::Remote(_) => "remote",
        }
    }

    /// Logical path prefix contributed by the context
    pub fn path(&self) -> String {
        match self {
            AssetContext::Fallback(ctx) => ctx.path(),
            AssetContext::Direct(ctx) => ctx.path().to_string(),
            AssetContext::Remote(_) => String::new(),
        }
    }
}

impl From<FallbackContext> for AssetContext {
    fn from(ctx: FallbackContext) -> Self {
        AssetContext::Fallback(ctx)
    }
}

impl From<DirectContext> for AssetContext {
    fn from(ctx: DirectContext) -> Self {
        AssetContext::Direct(ctx)
    }
}

impl From<RemoteContext> for AssetContext {
    fn from(ctx: RemoteContext) -> Self {
        AssetContext::Remote(ctx)
    }
}

/// A logical asset: file path, optional owning module, resolution context
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetReference {
    file_path: String,
    module: Option<String>,
    context: AssetContext,
}

impl AssetReference {
    pub fn new(file_path: impl Into<String>, context: impl Into<AssetContext>) -> Self {
        Self {
            file_path: file_path.into(),
            module: None,
            context: context.into(),
        }
    }

    /// Builder: set the owning module (e.g. `Vendor_Checkout`)
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        let module = module.into();
        self.module = if module.is_empty() { None } else { Some(module) };
        self
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn context(&self) -> &AssetContext {
        &self.context
    }

    /// Logical asset path: `[<context path>/][<module>/]<file path>`
    pub fn path(&self) -> String {
        let context_path = self.context.path();
        let parts = [
            context_path.as_str(),
            self.module.as_deref().unwrap_or(""),
            self.file_path.as_str(),
        ];
        parts
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("/")
    }
}
