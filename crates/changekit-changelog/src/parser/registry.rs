//! Parser registry

use std::sync::Arc;

use changekit_core::LayoutConfig;

use super::{ChangelogParser, ParserOptions, RstParser, YamlParser};

/// Registry of available changelog parsers
pub struct ParserRegistry {
    parsers: Vec<Arc<dyn ChangelogParser>>,
}

impl ParserRegistry {
    /// Create a new registry with all built-in parsers
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default(), ParserOptions::default())
    }

    /// Create a registry whose built-in parsers share a layout and options
    pub fn with_config(layout: LayoutConfig, options: ParserOptions) -> Self {
        Self {
            parsers: vec![
                Arc::new(RstParser::with_config(layout, options)),
                Arc::new(YamlParser::with_options(options)),
            ],
        }
    }

    /// Get parser by file extension
    pub fn get(&self, extension: &str) -> Option<Arc<dyn ChangelogParser>> {
        self.parsers
            .iter()
            .find(|p| p.extension() == extension)
            .cloned()
    }

    /// Get all supported file extensions
    pub fn extensions(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.extension()).collect()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
