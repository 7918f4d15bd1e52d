//! RST release-notes formatter

use changekit_core::{FormatError, LayoutConfig, Result};
use tracing::{debug, info, instrument, warn};

use super::wrap::wrap;
use super::ChangelogFormatter;
use crate::grouping::ReleaseGroups;
use crate::types::Changelog;

/// RST release-notes formatter
pub struct RstFormatter {
    layout: LayoutConfig,
    /// Reflow entry text to this width
    pub line_width: Option<usize>,
}

impl RstFormatter {
    /// Create a new formatter with the default layout
    pub fn new() -> Self {
        Self {
            layout: LayoutConfig::default(),
            line_width: None,
        }
    }

    /// Create a formatter with a custom layout
    pub fn with_layout(layout: LayoutConfig) -> Self {
        Self {
            layout,
            line_width: None,
        }
    }

    /// Reflow entry text to the given width
    pub fn with_line_width(mut self, line_width: Option<usize>) -> Self {
        self.line_width = line_width;
        self
    }

    fn push_entry(&self, lines: &mut Vec<String>, text: &str) {
        match self.line_width {
            Some(width) => lines.extend(wrap(text, width, "- ", "  ")),
            None => {
                for (i, line) in text.lines().enumerate() {
                    let marker = if i == 0 { "- " } else { "  " };
                    lines.push(format!("{}{}", marker, line));
                }
            }
        }
        lines.push(String::new());
    }
}

impl Default for RstFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for RstFormatter {
    #[instrument(skip(self, changelog), fields(entries = changelog.entries.len(), line_width = ?self.line_width))]
    fn format(&self, changelog: &Changelog) -> Result<String> {
        info!("formatting RST changelog");
        let groups = ReleaseGroups::from_entries(&changelog.entries);
        let mut lines: Vec<String> = Vec::new();

        for (release, types) in groups.releases_descending() {
            let date = changelog
                .release_dates
                .get(release)
                .ok_or_else(|| FormatError::MissingReleaseDate(release.to_string()))?;
            let title = format!("{} ({})", release, date);
            push_header(&mut lines, Some(title.as_str()), '=');

            for dropped in types
                .keys()
                .filter(|t| self.layout.entry_type_rank(t.as_deref()).is_none())
            {
                warn!(
                    release,
                    entry_type = ?dropped,
                    "entry type is not in the section order, its entries are not written"
                );
            }

            for entry_type in &self.layout.entry_type_order {
                let Some(subpackages) = types.get(entry_type) else {
                    continue;
                };
                push_header(&mut lines, entry_type.as_deref(), '-');

                for (subpackage, texts) in subpackages {
                    let title = subpackage
                        .as_deref()
                        .map(|s| self.layout.qualified_subpackage(s));
                    push_header(&mut lines, title.as_deref(), '^');

                    for text in texts {
                        self.push_entry(&mut lines, text);
                    }
                }
            }
        }

        let output: String = lines.iter().map(|line| format!("{}\n", line)).collect();
        debug!(output_len = output.len(), "RST changelog formatted");
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "rst"
    }
}

/// Title, underline and blank line; nothing for an absent title
fn push_header(lines: &mut Vec<String>, title: Option<&str>, underline: char) {
    if let Some(title) = title {
        lines.push(title.to_string());
        lines.push(underline.to_string().repeat(title.chars().count()));
        lines.push(String::new());
    }
}
