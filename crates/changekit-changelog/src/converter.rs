//! Changelog conversion

use std::path::Path;
use std::sync::Arc;

use changekit_core::{Result, UsageError};
use tracing::{debug, info, instrument};

use crate::formatter::{ChangelogFormatter, FormatterRegistry};
use crate::parser::{ChangelogParser, ParserRegistry};
use crate::types::Changelog;

/// Result of a conversion: the parsed changelog and the rendered document
#[derive(Debug, Clone)]
pub struct Conversion {
    pub changelog: Changelog,
    pub output: String,
}

/// Converts a changelog document from one format to another
pub struct Converter {
    parser: Arc<dyn ChangelogParser>,
    formatter: Arc<dyn ChangelogFormatter>,
}

impl Converter {
    /// Create a converter from a parser and a formatter
    pub fn new(parser: Arc<dyn ChangelogParser>, formatter: Arc<dyn ChangelogFormatter>) -> Self {
        Self { parser, formatter }
    }

    /// Pick the parser and formatter from the file extensions of two paths
    pub fn for_paths(
        input: &Path,
        output: &Path,
        parsers: &ParserRegistry,
        formatters: &FormatterRegistry,
    ) -> Result<Self> {
        if same_file(input, output) {
            return Err(UsageError::SamePath(input.to_path_buf()).into());
        }

        let parser = extension(input)
            .and_then(|ext| parsers.get(ext))
            .ok_or_else(|| UsageError::UnsupportedInput {
                path: input.to_path_buf(),
                expected: describe_extensions(&parsers.extensions()),
            })?;
        let formatter = extension(output)
            .and_then(|ext| formatters.get(ext))
            .ok_or_else(|| UsageError::UnsupportedOutput {
                path: output.to_path_buf(),
                expected: describe_extensions(&formatters.extensions()),
            })?;

        debug!(
            parser = parser.extension(),
            formatter = formatter.extension(),
            "converter selected"
        );
        Ok(Self::new(parser, formatter))
    }

    /// Convert a document held in memory
    #[instrument(skip(self, input), fields(input_len = input.len()))]
    pub fn convert(&self, input: &str) -> Result<Conversion> {
        let changelog = self.parser.parse(input)?;
        let output = self.formatter.format(&changelog)?;
        Ok(Conversion { changelog, output })
    }

    /// Read `input`, convert it and write the result to `output`.
    ///
    /// Nothing is written when parsing or formatting fails.
    #[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<Changelog> {
        info!("converting changelog");
        let content = std::fs::read_to_string(input)?;
        let conversion = self.convert(&content)?;
        std::fs::write(output, &conversion.output)?;
        info!(
            entries = conversion.changelog.entries.len(),
            bytes = conversion.output.len(),
            "changelog written"
        );
        Ok(conversion.changelog)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// `.rst or .yml`
fn describe_extensions(extensions: &[&str]) -> String {
    let dotted: Vec<String> = extensions.iter().map(|e| format!(".{}", e)).collect();
    dotted.join(" or ")
}

/// Paths are equal as written, or resolve to the same existing file
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RST: &str = "\
4.0 (2020-01-01)
================

Bug Fixes
---------

astropy.units
^^^^^^^^^^^^^

- Fixed Z. [#300]

";

    fn converter(input: &Path, output: &Path) -> Result<Converter> {
        Converter::for_paths(
            input,
            output,
            &ParserRegistry::new(),
            &FormatterRegistry::new(),
        )
    }

    #[test]
    fn test_same_path_rejected() {
        let path = Path::new("CHANGES.rst");
        let err = converter(path, path).err().unwrap();
        assert!(err.to_string().contains("must be different"));
    }

    #[test]
    fn test_same_file_through_different_spelling() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGES.rst");
        std::fs::write(&path, RST).unwrap();
        let other = temp.path().join(".").join("CHANGES.rst");

        assert!(converter(&path, &other).is_err());
    }

    #[test]
    fn test_unsupported_extensions() {
        let err = converter(Path::new("CHANGES.md"), Path::new("out.yml"))
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "input must be .rst or .yml: CHANGES.md");

        let err = converter(Path::new("CHANGES.rst"), Path::new("out.json"))
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "output must be .rst or .yml: out.json");

        assert!(converter(Path::new("CHANGES"), Path::new("out.yml")).is_err());
    }

    #[test]
    fn test_convert_file_round_trip() {
        let temp = TempDir::new().unwrap();
        let rst_in = temp.path().join("CHANGES.rst");
        let yml = temp.path().join("changes.yml");
        let rst_out = temp.path().join("CHANGES.new.rst");
        std::fs::write(&rst_in, RST).unwrap();

        let changelog = converter(&rst_in, &yml)
            .unwrap()
            .convert_file(&rst_in, &yml)
            .unwrap();
        assert_eq!(changelog.entries.len(), 1);
        assert!(std::fs::read_to_string(&yml).unwrap().contains("RELEASE_DATES"));

        converter(&yml, &rst_out)
            .unwrap()
            .convert_file(&yml, &rst_out)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&rst_out).unwrap(), RST);
    }

    #[test]
    fn test_failed_parse_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let rst_in = temp.path().join("CHANGES.rst");
        let yml = temp.path().join("changes.yml");
        std::fs::write(&rst_in, "Not a release\n=============\n").unwrap();

        let result = converter(&rst_in, &yml).unwrap().convert_file(&rst_in, &yml);
        assert!(result.is_err());
        assert!(!yml.exists());
    }

    #[test]
    fn test_convert_in_memory() {
        let converter = Converter::new(
            ParserRegistry::new().get("rst").unwrap(),
            FormatterRegistry::new().get("rst").unwrap(),
        );
        let conversion = converter.convert(RST).unwrap();
        assert_eq!(conversion.output, RST);
        assert_eq!(conversion.changelog.entries[0].pull_requests, vec![300]);
    }
}
