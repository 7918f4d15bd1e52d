//! YAML entries parser
//!
//! Reads either the full four-document stream (instructions, template,
//! release dates, entries) or a single document holding the entries list.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use changekit_core::{ParseError, Result};
use tracing::{debug, info, instrument};

use super::{ChangelogParser, ParserOptions};
use crate::types::{Changelog, Entry, ReleaseDates};

/// Documents in the full stream
const FULL_STREAM_DOCUMENTS: usize = 4;

/// Third document of the full stream
#[derive(Debug, Default, Deserialize)]
struct ReleaseDatesDocument {
    #[serde(rename = "RELEASE_DATES", default)]
    release_dates: Option<ReleaseDates>,
}

/// Parser for YAML entry streams
pub struct YamlParser {
    options: ParserOptions,
}

impl YamlParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self {
            options: ParserOptions::default(),
        }
    }

    /// Create a parser with custom options
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogParser for YamlParser {
    #[instrument(skip(self, input), fields(input_len = input.len()))]
    fn parse(&self, input: &str) -> Result<Changelog> {
        info!("parsing YAML changelog");

        let mut documents: Vec<serde_yaml::Deserializer<'_>> =
            serde_yaml::Deserializer::from_str(input).collect();
        debug!(documents = documents.len(), "YAML stream split");

        let (mut entries, release_dates) = match documents.len() {
            FULL_STREAM_DOCUMENTS => {
                let entries_doc = documents.pop();
                let dates_doc = documents.pop();
                let dates: ReleaseDatesDocument = read_document(dates_doc)?;
                let entries: Vec<Entry> = read_document(entries_doc)?;
                (entries, dates.release_dates.unwrap_or_default())
            }
            1 => (read_document(documents.pop())?, ReleaseDates::new()),
            found => return Err(ParseError::UnexpectedDocumentCount { found }.into()),
        };

        if let Some(max) = self.options.max_entries {
            entries.truncate(max);
        }

        debug!(
            entries = entries.len(),
            releases = release_dates.len(),
            "YAML changelog parsed"
        );
        Ok(Changelog::new(entries, release_dates))
    }

    fn extension(&self) -> &'static str {
        "yml"
    }
}

/// Deserialize one document, reading an empty or `null` document as the default
fn read_document<T>(document: Option<serde_yaml::Deserializer<'_>>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(document) = document else {
        return Ok(T::default());
    };
    let value: Option<T> = Option::deserialize(document).map_err(ParseError::Yaml)?;
    Ok(value.unwrap_or_default())
}
