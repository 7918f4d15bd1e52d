//! RST release-notes parser
//!
//! Headers are recognized by the underline on the following line:
//! `=` for releases, `-` for entry types and `^` for subpackages. Entries are
//! `- ` bullets whose continuation lines are indented by two spaces.

use regex::Regex;
use std::sync::LazyLock;

use changekit_core::{LayoutConfig, ParseError, Result};
use tracing::{debug, info, instrument};

use super::{ChangelogParser, ParserOptions};
use crate::markers::pull_requests_in;
use crate::types::{Changelog, Entry, ReleaseDates};

static SUBPACKAGE_UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\^+\s*$").expect("Invalid regex"));

static RELEASE_UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^=+\s*$").expect("Invalid regex"));

static TYPE_UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+\s*$").expect("Invalid regex"));

/// `<release> (<date>)`
static RELEASE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<release>\S+)\s+\((?P<date>[^)]+)\)").expect("Invalid regex")
});

const BULLET: &str = "- ";
const CONTINUATION: &str = "  ";

/// What a line means to the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    BulletStart,
    BulletContinuation,
    SubpackageHeader,
    ReleaseHeader,
    TypeHeader,
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Idle,
    InEntry,
}

/// Headers in effect for the entries being read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ParseContext {
    releases: Vec<String>,
    entry_types: Vec<Option<String>>,
    subpackages: Vec<Option<String>>,
}

impl ParseContext {
    /// A release header resets the type and subpackage
    fn with_release(&self, release: &str) -> Self {
        Self {
            releases: vec![release.to_string()],
            entry_types: vec![None],
            subpackages: vec![None],
        }
    }

    /// An entry-type header resets the subpackage
    fn with_entry_type(&self, entry_type: &str) -> Self {
        Self {
            releases: self.releases.clone(),
            entry_types: vec![Some(entry_type.to_string())],
            subpackages: vec![None],
        }
    }

    fn with_subpackage(&self, subpackage: &str) -> Self {
        Self {
            releases: self.releases.clone(),
            entry_types: self.entry_types.clone(),
            subpackages: vec![Some(subpackage.to_string())],
        }
    }

    /// Build an entry from the raw bullet lines
    fn entry(&self, raw_lines: &[&str]) -> Entry {
        let lines: Vec<&str> = raw_lines
            .iter()
            .map(|line| skip_chars(line, BULLET.len()).trim())
            .collect();

        Entry {
            entry_types: self.entry_types.clone(),
            pull_requests: pull_requests_in(&lines.join(" ")),
            releases: self.releases.clone(),
            subpackages: self.subpackages.clone(),
            text: lines.join("\n"),
        }
    }
}

/// Parser for RST release notes
pub struct RstParser {
    layout: LayoutConfig,
    options: ParserOptions,
}

impl RstParser {
    /// Create a new parser with the default layout
    pub fn new() -> Self {
        Self {
            layout: LayoutConfig::default(),
            options: ParserOptions::default(),
        }
    }

    /// Create a parser with a custom layout and options
    pub fn with_config(layout: LayoutConfig, options: ParserOptions) -> Self {
        Self { layout, options }
    }

    /// Entry lines are checked first so that an open bullet swallows
    /// anything that would otherwise look like a header.
    fn classify(line: &str, next: &str, state: ScanState) -> LineKind {
        if state == ScanState::InEntry {
            LineKind::BulletContinuation
        } else if line.starts_with(BULLET) {
            LineKind::BulletStart
        } else if SUBPACKAGE_UNDERLINE.is_match(next) {
            LineKind::SubpackageHeader
        } else if RELEASE_UNDERLINE.is_match(next) {
            LineKind::ReleaseHeader
        } else if TYPE_UNDERLINE.is_match(next) {
            LineKind::TypeHeader
        } else {
            LineKind::Blank
        }
    }

    fn release_header(line: &str, line_number: usize) -> Result<(String, String)> {
        let caps = RELEASE_HEADER
            .captures(line)
            .ok_or_else(|| ParseError::InvalidReleaseHeader {
                line: line_number,
                text: line.trim_end().to_string(),
            })?;
        Ok((caps["release"].to_string(), caps["date"].to_string()))
    }
}

impl Default for RstParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogParser for RstParser {
    #[instrument(skip(self, input), fields(input_len = input.len()))]
    fn parse(&self, input: &str) -> Result<Changelog> {
        info!(max_entries = ?self.options.max_entries, "parsing RST changelog");

        // A trailing empty line gives the last real line a successor.
        let mut lines: Vec<&str> = input.split_inclusive('\n').collect();
        lines.push("");

        let mut context = ParseContext::default();
        let mut state = ScanState::Idle;
        let mut pending: Vec<&str> = Vec::new();
        let mut entries = Vec::new();
        let mut release_dates = ReleaseDates::new();

        for (index, pair) in lines.windows(2).enumerate() {
            if self.options.limit_reached(entries.len()) {
                debug!(entries = entries.len(), "entry limit reached");
                break;
            }

            let (line, next) = (pair[0], pair[1]);
            match Self::classify(line, next, state) {
                LineKind::BulletStart | LineKind::BulletContinuation => {
                    pending.push(line);
                    if next.starts_with(CONTINUATION) {
                        state = ScanState::InEntry;
                    } else {
                        state = ScanState::Idle;
                        entries.push(context.entry(&pending));
                        pending.clear();
                    }
                }
                LineKind::SubpackageHeader => {
                    let subpackage = self.layout.strip_namespace(line).trim();
                    context = context.with_subpackage(subpackage);
                }
                LineKind::ReleaseHeader => {
                    let (release, date) = Self::release_header(line, index + 1)?;
                    debug!(%release, %date, "release header");
                    context = context.with_release(&release);
                    release_dates.insert(release, date);
                }
                LineKind::TypeHeader => {
                    context = context.with_entry_type(line.trim());
                }
                LineKind::Blank => {}
            }
        }

        debug!(
            entries = entries.len(),
            releases = release_dates.len(),
            "RST changelog parsed"
        );
        Ok(Changelog::new(entries, release_dates))
    }

    fn extension(&self) -> &'static str {
        "rst"
    }
}

/// Drop the first `count` characters of a line
fn skip_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
4.0 (2020-01-01)
================

New Features
------------

astropy.table
^^^^^^^^^^^^^

- Added X. [#123, #124]

- Added a new method ``Table.cstack()`` for
  column-wise stacking. [#200]

Bug Fixes
---------

astropy.units
^^^^^^^^^^^^^

- Fixed Z. [#300]

3.2.3 (2019-10-27)
==================

Other Changes and Additions
---------------------------

- Updated bundled library. [#400]
";

    fn parse(input: &str) -> Changelog {
        RstParser::new().parse(input).unwrap()
    }

    #[test]
    fn test_release_dates() {
        let changelog = parse(SAMPLE);
        assert_eq!(changelog.release_dates["4.0"], "2020-01-01");
        assert_eq!(changelog.release_dates["3.2.3"], "2019-10-27");
    }

    #[test]
    fn test_entry_context() {
        let changelog = parse(SAMPLE);
        assert_eq!(changelog.entries.len(), 4);

        let first = &changelog.entries[0];
        assert_eq!(first.releases, vec!["4.0"]);
        assert_eq!(first.entry_types, vec![Some("New Features".to_string())]);
        assert_eq!(first.subpackages, vec![Some("table".to_string())]);
        assert_eq!(first.pull_requests, vec![123, 124]);
        assert_eq!(first.text, "Added X. [#123, #124]");
    }

    #[test]
    fn test_bug_fix_entry() {
        let input = "4.0 (2020-01-01)\n================\n\nBug Fixes\n---------\n\n- Added X. [#123, #124]\n";
        let changelog = parse(input);

        assert_eq!(changelog.entries.len(), 1);
        let entry = &changelog.entries[0];
        assert_eq!(entry.entry_types, vec![Some("Bug Fixes".to_string())]);
        assert_eq!(entry.pull_requests, vec![123, 124]);
        assert_eq!(entry.subpackages, vec![None]);
    }

    #[test]
    fn test_multiline_entry() {
        let changelog = parse(SAMPLE);
        let entry = &changelog.entries[1];
        assert_eq!(
            entry.text,
            "Added a new method ``Table.cstack()`` for\ncolumn-wise stacking. [#200]"
        );
        assert_eq!(entry.pull_requests, vec![200]);
    }

    #[test]
    fn test_type_header_resets_subpackage() {
        let changelog = parse(SAMPLE);
        let entry = &changelog.entries[2];
        assert_eq!(entry.entry_types, vec![Some("Bug Fixes".to_string())]);
        assert_eq!(entry.subpackages, vec![Some("units".to_string())]);
    }

    #[test]
    fn test_release_header_resets_type_and_subpackage() {
        let changelog = parse(SAMPLE);
        let entry = &changelog.entries[3];
        assert_eq!(entry.releases, vec!["3.2.3"]);
        assert_eq!(
            entry.entry_types,
            vec![Some("Other Changes and Additions".to_string())]
        );
        assert_eq!(entry.subpackages, vec![None]);
    }

    #[test]
    fn test_entry_directly_under_release() {
        let changelog = parse("1.0 (unreleased)\n================\n\n- Initial release.\n");
        let entry = &changelog.entries[0];
        assert_eq!(entry.entry_types, vec![None]);
        assert_eq!(entry.subpackages, vec![None]);
        assert_eq!(changelog.release_dates["1.0"], "unreleased");
    }

    #[test]
    fn test_invalid_release_header() {
        let err = RstParser::new()
            .parse("Release four\n============\n")
            .unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_open_entry_swallows_header_lookalike() {
        // The continuation line is taken as entry text even though the line
        // after it is an underline.
        let input = "1.0 (2020-01-01)\n================\n\n- Added\n  Table\n---\n";
        let changelog = parse(input);
        assert_eq!(changelog.entries.len(), 1);
        assert_eq!(changelog.entries[0].text, "Added\nTable");
        assert_eq!(changelog.entries[0].entry_types, vec![None]);
    }

    #[test]
    fn test_continuation_decided_by_next_line() {
        // An unindented line closes the entry; the following indented line
        // is not picked up again.
        let input = "1.0 (2020-01-01)\n================\n\n- One\nstray\n  indented\n";
        let changelog = parse(input);
        assert_eq!(changelog.entries.len(), 1);
        assert_eq!(changelog.entries[0].text, "One");
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = "4.0 (2020-01-01)\r\n================\r\n\r\nBug Fixes\r\n---------\r\n\r\n- Fixed. [#5]\r\n";
        let changelog = parse(input);
        assert_eq!(changelog.entries[0].text, "Fixed. [#5]");
        assert_eq!(
            changelog.entries[0].entry_types,
            vec![Some("Bug Fixes".to_string())]
        );
    }

    #[test]
    fn test_custom_namespace_prefix() {
        let layout = LayoutConfig {
            namespace_prefix: "pkg.".to_string(),
            ..LayoutConfig::default()
        };
        let parser = RstParser::with_config(layout, ParserOptions::default());
        let input = "1.0 (2020-01-01)\n================\n\npkg.core\n^^^^^^^^\n\n- Done.\n";
        let changelog = parser.parse(input).unwrap();
        assert_eq!(changelog.entries[0].subpackages, vec![Some("core".to_string())]);
    }

    #[test]
    fn test_max_entries() {
        let parser = RstParser::with_config(
            LayoutConfig::default(),
            ParserOptions::new().with_max_entries(2),
        );
        let changelog = parser.parse(SAMPLE).unwrap();
        assert_eq!(changelog.entries.len(), 2);
        assert!(!changelog.release_dates.contains_key("3.2.3"));
    }

    #[test]
    fn test_no_trailing_newline() {
        let changelog = parse("1.0 (2020-01-01)\n================\n\n- Last entry");
        assert_eq!(changelog.entries[0].text, "Last entry");
    }

    #[test]
    fn test_skip_chars_multibyte() {
        assert_eq!(skip_chars("- é", 2), "é");
        assert_eq!(skip_chars("-", 2), "");
    }
}
