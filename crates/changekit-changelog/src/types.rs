//! Changelog types

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Release identifier to release date, as written in release headers
pub type ReleaseDates = BTreeMap<String, String>;

/// A single changelog record
///
/// Every tag field is a list: an entry that belongs to several releases,
/// types or subpackages is written once per combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    /// Section titles; `None` for entries sitting directly under a release
    pub entry_types: Vec<Option<String>>,
    /// Pull request numbers
    pub pull_requests: Vec<u64>,
    /// Release identifiers
    pub releases: Vec<String>,
    /// Affected subpackages; `None` when no subpackage header applies
    pub subpackages: Vec<Option<String>>,
    /// Description, possibly spanning several lines
    pub text: String,
}

impl Entry {
    /// Create an entry with just the description set
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Add a release
    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.releases.push(release.into());
        self
    }

    /// Add an entry type
    pub fn with_entry_type(mut self, entry_type: impl Into<String>) -> Self {
        self.entry_types.push(Some(entry_type.into()));
        self
    }

    /// Add a subpackage
    pub fn with_subpackage(mut self, subpackage: impl Into<String>) -> Self {
        self.subpackages.push(Some(subpackage.into()));
        self
    }

    /// Set the pull request numbers
    pub fn with_pull_requests(mut self, pull_requests: impl IntoIterator<Item = u64>) -> Self {
        self.pull_requests = pull_requests.into_iter().collect();
        self
    }

    /// Number of grouped positions this entry occupies in release notes
    pub fn placements(&self) -> usize {
        self.releases.len() * self.entry_types.len() * self.subpackages.len()
    }
}

/// A parsed changelog: entries in document order plus known release dates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    /// Entries in the order they were read
    pub entries: Vec<Entry>,
    /// Dates of the releases seen in release headers
    pub release_dates: ReleaseDates,
}

impl Changelog {
    /// Create a changelog from its parts
    pub fn new(entries: Vec<Entry>, release_dates: ReleaseDates) -> Self {
        Self {
            entries,
            release_dates,
        }
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct tag values used across all entries
    pub fn uniques(&self) -> Uniques {
        let mut uniques = Uniques::default();
        for entry in &self.entries {
            uniques
                .subpackages
                .extend(entry.subpackages.iter().cloned());
            uniques.releases.extend(entry.releases.iter().cloned());
            uniques
                .entry_types
                .extend(entry.entry_types.iter().cloned());
        }
        uniques
    }
}

/// Distinct values of the tag fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Uniques {
    pub subpackages: BTreeSet<Option<String>>,
    pub releases: BTreeSet<String>,
    pub entry_types: BTreeSet<Option<String>>,
}
