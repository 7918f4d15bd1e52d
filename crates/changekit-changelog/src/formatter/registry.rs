//! Formatter registry

use std::sync::Arc;

use changekit_core::Config;

use super::{ChangelogFormatter, RstFormatter, YamlFormatter};

/// Registry of available changelog formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn ChangelogFormatter>>,
}

impl FormatterRegistry {
    /// Create a new registry with all built-in formatters
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a registry whose built-in formatters follow the given config
    pub fn with_config(config: &Config) -> Self {
        Self {
            formatters: vec![
                Arc::new(
                    RstFormatter::with_layout(config.layout.clone())
                        .with_line_width(config.markup.line_width),
                ),
                Arc::new(YamlFormatter::with_layout(config.layout.clone()).with_flat(config.data.flat)),
            ],
        }
    }

    /// Get formatter by file extension
    pub fn get(&self, extension: &str) -> Option<Arc<dyn ChangelogFormatter>> {
        self.formatters
            .iter()
            .find(|f| f.extension() == extension)
            .cloned()
    }

    /// Get all supported file extensions
    pub fn extensions(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.extension()).collect()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = FormatterRegistry::new();
        assert_eq!(registry.formatters.len(), 2);
    }

    #[test]
    fn test_get_by_extension() {
        let registry = FormatterRegistry::new();
        assert!(registry.get("rst").is_some());
        assert!(registry.get("yml").is_some());
        assert!(registry.get("md").is_none());
    }

    #[test]
    fn test_extensions() {
        let registry = FormatterRegistry::new();
        let exts = registry.extensions();
        assert!(exts.contains(&"rst"));
        assert!(exts.contains(&"yml"));
    }
}
