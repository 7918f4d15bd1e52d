//! Configuration types

use serde::{Deserialize, Serialize};

use super::defaults::{
    DEFAULT_ALLOWED_ENTRY_TYPES, DEFAULT_ENTRY_TYPE_ORDER, DEFAULT_NAMESPACE_PREFIX,
    DEFAULT_SUGGESTED_SUBPACKAGES, DEFAULT_UNPREFIXED_SUBPACKAGES,
};

/// Main configuration for changekit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document layout shared by parsers and formatters
    pub layout: LayoutConfig,

    /// Markup output options
    pub markup: MarkupConfig,

    /// Data-format output options
    pub data: DataConfig,
}

/// Layout of the release-notes document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Prefix stripped from subpackage headers on read and re-added on write
    pub namespace_prefix: String,

    /// Order in which entry-type sections are written.
    ///
    /// `None` stands for entries that sit directly under a release header.
    /// Types missing from this list are not written to markup output.
    pub entry_type_order: Vec<Option<String>>,

    /// Subpackages written without the namespace prefix
    pub unprefixed_subpackages: Vec<String>,

    /// Entry types offered in the data-format template
    pub allowed_entry_types: Vec<String>,

    /// Subpackages named in the data-format instructions
    pub suggested_subpackages: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            namespace_prefix: DEFAULT_NAMESPACE_PREFIX.to_string(),
            entry_type_order: DEFAULT_ENTRY_TYPE_ORDER
                .iter()
                .copied()
                .map(|t| t.map(str::to_string))
                .collect(),
            unprefixed_subpackages: DEFAULT_UNPREFIXED_SUBPACKAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            allowed_entry_types: DEFAULT_ALLOWED_ENTRY_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            suggested_subpackages: DEFAULT_SUGGESTED_SUBPACKAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl LayoutConfig {
    /// Remove the namespace prefix from a raw subpackage header line
    pub fn strip_namespace<'a>(&self, header: &'a str) -> &'a str {
        header
            .strip_prefix(self.namespace_prefix.as_str())
            .unwrap_or(header)
    }

    /// Header text for a subpackage, with the namespace prefix where it applies
    pub fn qualified_subpackage(&self, subpackage: &str) -> String {
        if self.unprefixed_subpackages.iter().any(|s| s == subpackage) {
            subpackage.to_string()
        } else {
            format!("{}{}", self.namespace_prefix, subpackage)
        }
    }

    /// Position of an entry type in the output order
    pub fn entry_type_rank(&self, entry_type: Option<&str>) -> Option<usize> {
        self.entry_type_order
            .iter()
            .position(|t| t.as_deref() == entry_type)
    }
}

/// Markup output options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Reflow entry text to this width (no reflow when unset)
    pub line_width: Option<usize>,
}

/// Data-format output options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Write only the entries list, without instructions, template or dates
    pub flat: bool,
}
