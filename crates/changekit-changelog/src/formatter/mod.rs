//! Changelog formatters

mod registry;
mod rst;
mod wrap;
mod yaml;

pub use registry::FormatterRegistry;
pub use rst::RstFormatter;
pub use wrap::wrap;
pub use yaml::YamlFormatter;

use changekit_core::Result;

use crate::types::Changelog;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render a changelog as a whole document
    fn format(&self, changelog: &Changelog) -> Result<String>;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
