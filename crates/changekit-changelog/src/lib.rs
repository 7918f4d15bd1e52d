//! Changekit Changelog - conversion between release notes and entry records
//!
//! This crate reads a changelog either as an RST release-notes document or as
//! a YAML stream of entries, and writes it back out in the other shape.

pub mod converter;
pub mod formatter;
pub mod grouping;
pub mod markers;
pub mod parser;
pub mod types;

pub use converter::{Conversion, Converter};
pub use formatter::{ChangelogFormatter, FormatterRegistry, RstFormatter, YamlFormatter};
pub use grouping::ReleaseGroups;
pub use parser::{ChangelogParser, ParserOptions, ParserRegistry, RstParser, YamlParser};
pub use types::{Changelog, Entry, ReleaseDates, Uniques};
