//! Changelog parsing

mod registry;
mod rst;
mod types;
mod yaml;

pub use registry::ParserRegistry;
pub use rst::RstParser;
pub use types::*;
pub use yaml::YamlParser;

use changekit_core::Result;

use crate::types::Changelog;

/// Trait for changelog document parsers
pub trait ChangelogParser: Send + Sync {
    /// Parse a whole document into entries and release dates
    fn parse(&self, input: &str) -> Result<Changelog>;

    /// Get the file extension handled by this parser
    fn extension(&self) -> &'static str;
}
