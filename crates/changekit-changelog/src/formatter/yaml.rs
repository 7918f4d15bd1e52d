//! YAML entries formatter
//!
//! The full stream carries four documents: instructions for editors, a
//! template entry, the release dates and the entries themselves. Multi-line
//! strings come out as literal blocks and every entry is written in full,
//! with no anchors or aliases.

use serde::Serialize;

use changekit_core::{FormatError, LayoutConfig, Result};
use tracing::{debug, info, instrument};

use super::wrap::wrap;
use super::ChangelogFormatter;
use crate::types::{Changelog, Entry, ReleaseDates};

const INSTRUCTIONS_FIELDS: &str = "\
To add an entry to the changelog, copy the template entry (the document that
follows the --- below this text) to a quasi-random location of the entries
list (NOT the top or bottom). Then fill in each of the values:

entry_types: one or more of the types listed in the template, verbatim.
\"New Features\" and \"Bug Fixes\" are the most common.

pull_requests: one or more pull request numbers related to the change.

releases: one or more releases that should include this change. Pure bug
fixes may be backported to the current stable and LTS releases.

subpackages: one or more subpackages impacted by the change, without the
package namespace prefix.";

const INSTRUCTIONS_TEXT: &str = "\
text: description of the change, indented by two spaces in the block. Use the
past tense, for instance \"Added a new method ``Table.cstack()`` for
column-wise stacking\". Enclose literals in double back-ticks.
";

/// Width of the subpackage list in the instructions
const INSTRUCTIONS_WIDTH: usize = 79;

const TEMPLATE_TEXT: &str = "\
Enter description of the update here, maintaining the example indentation
of two spaces before the text.  Use the past tense, for instance
\"Added a new method ``Table.cstack()`` for column-wise stacking.\"";

#[derive(Serialize)]
struct InstructionsDocument<'a> {
    #[serde(rename = "INSTRUCTIONS FOR ADDING A CHANGE LOG ENTRY")]
    instructions: &'a str,
}

#[derive(Serialize)]
struct ReleaseDatesDocument<'a> {
    #[serde(rename = "RELEASE_DATES")]
    release_dates: &'a ReleaseDates,
}

/// YAML entries formatter
pub struct YamlFormatter {
    layout: LayoutConfig,
    /// Write the entries list alone
    pub flat: bool,
}

impl YamlFormatter {
    /// Create a formatter writing the full four-document stream
    pub fn new() -> Self {
        Self {
            layout: LayoutConfig::default(),
            flat: false,
        }
    }

    /// Create a formatter with a custom layout
    pub fn with_layout(layout: LayoutConfig) -> Self {
        Self {
            layout,
            flat: false,
        }
    }

    /// Write only the entries list
    pub fn with_flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    /// Editor instructions, listing the suggested subpackages when there are any
    fn instructions(&self) -> String {
        let mut instructions = String::from(INSTRUCTIONS_FIELDS);
        let subpackages = &self.layout.suggested_subpackages;
        if subpackages.is_empty() {
            instructions.push('\n');
        } else {
            instructions.push_str(" Available subpackages are:\n");
            for line in wrap(&subpackages.join(", "), INSTRUCTIONS_WIDTH, "  ", "  ") {
                instructions.push_str(&line);
                instructions.push('\n');
            }
        }
        instructions.push('\n');
        instructions.push_str(INSTRUCTIONS_TEXT);
        instructions
    }

    /// The blank entry offered to editors
    fn template(&self) -> Entry {
        Entry {
            entry_types: self
                .layout
                .allowed_entry_types
                .iter()
                .cloned()
                .map(Some)
                .collect(),
            ..Entry::new(TEMPLATE_TEXT)
        }
    }
}

impl Default for YamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for YamlFormatter {
    #[instrument(skip(self, changelog), fields(entries = changelog.entries.len(), flat = self.flat))]
    fn format(&self, changelog: &Changelog) -> Result<String> {
        info!("formatting YAML changelog");

        let entries = serde_yaml::to_string(&changelog.entries).map_err(FormatError::Yaml)?;
        if self.flat {
            debug!(output_len = entries.len(), "flat YAML changelog formatted");
            return Ok(entries);
        }

        let instructions = self.instructions();
        let documents = [
            serde_yaml::to_string(&InstructionsDocument {
                instructions: &instructions,
            }),
            serde_yaml::to_string(&[self.template()]),
            serde_yaml::to_string(&ReleaseDatesDocument {
                release_dates: &changelog.release_dates,
            }),
        ]
        .into_iter()
        .collect::<std::result::Result<Vec<String>, _>>()
        .map_err(FormatError::Yaml)?;

        let mut output = documents.join("---\n");
        output.push_str("---\n");
        output.push_str(&entries);

        debug!(output_len = output.len(), "YAML changelog formatted");
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "yml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ChangelogParser, YamlParser};

    fn sample() -> Changelog {
        let mut release_dates = ReleaseDates::new();
        release_dates.insert("4.0".to_string(), "2020-01-01".to_string());
        release_dates.insert("3.2".to_string(), "2019-06-14".to_string());

        Changelog::new(
            vec![
                Entry::new("Fixed a bug\nover two lines. [#12]")
                    .with_release("4.0")
                    .with_release("3.2")
                    .with_entry_type("Bug Fixes")
                    .with_subpackage("table")
                    .with_pull_requests([12]),
                Entry {
                    entry_types: vec![None],
                    subpackages: vec![None],
                    ..Entry::new("Plain entry.").with_release("4.0")
                },
            ],
            release_dates,
        )
    }

    #[test]
    fn test_full_stream_has_four_documents() {
        let output = YamlFormatter::new().format(&sample()).unwrap();
        assert_eq!(output.matches("---\n").count(), 3);
        assert!(output.starts_with("INSTRUCTIONS FOR ADDING A CHANGE LOG ENTRY: |"));
        assert!(output.contains("RELEASE_DATES:"));
    }

    #[test]
    fn test_instructions_list_subpackages() {
        let output = YamlFormatter::new().format(&sample()).unwrap();
        assert!(output.contains("package namespace prefix. Available subpackages are:\n"));
        assert!(output.contains(
            "    config, constants, convolution, coordinates, cosmology, io.ascii, io.fits,\n"
        ));
        assert!(output.contains(
            "    table, tests, time, timeseries, uncertainty, units, utils, visualization, wcs\n"
        ));
    }

    #[test]
    fn test_instructions_without_subpackages() {
        let layout = LayoutConfig {
            suggested_subpackages: Vec::new(),
            ..LayoutConfig::default()
        };
        let instructions = YamlFormatter::with_layout(layout).instructions();
        assert!(!instructions.contains("Available subpackages"));
        assert!(instructions.contains("package namespace prefix.\n\ntext: "));
    }

    #[test]
    fn test_multiline_text_is_literal_block() {
        let output = YamlFormatter::new().format(&sample()).unwrap();
        assert!(output.contains("text: |"));
        assert!(output.contains("    over two lines. [#12]\n"));
    }

    #[test]
    fn test_template_lists_allowed_types() {
        let output = YamlFormatter::new().format(&sample()).unwrap();
        assert!(output.contains("- Other Changes\n"));
        assert!(output.contains("- Performance Improvements\n"));
    }

    #[test]
    fn test_no_aliases() {
        let output = YamlFormatter::new().format(&sample()).unwrap();
        assert!(!output.contains('&'));
        assert!(!output.contains('*'));
    }

    #[test]
    fn test_round_trip() {
        let changelog = sample();
        let output = YamlFormatter::new().format(&changelog).unwrap();
        let parsed = YamlParser::new().parse(&output).unwrap();
        assert_eq!(parsed, changelog);
    }

    #[test]
    fn test_flat_round_trip() {
        let changelog = sample();
        let output = YamlFormatter::new().with_flat(true).format(&changelog).unwrap();
        assert!(!output.contains("RELEASE_DATES"));

        let parsed = YamlParser::new().parse(&output).unwrap();
        assert_eq!(parsed.entries, changelog.entries);
        assert!(parsed.release_dates.is_empty());
    }

    #[test]
    fn test_empty_changelog() {
        let output = YamlFormatter::new().format(&Changelog::default()).unwrap();
        let parsed = YamlParser::new().parse(&output).unwrap();
        assert!(parsed.is_empty());
    }
}
