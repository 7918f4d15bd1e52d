//! Grouping of entries into release notes sections
//!
//! Entries are placed under release, then entry type, then subpackage. An
//! entry tagged with several values on any level is copied into every
//! combination.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::markers::with_marker;
use crate::types::Entry;

/// Entry texts per subpackage, in encounter order
pub type SubpackageGroups = IndexMap<Option<String>, Vec<String>>;

/// Subpackage groups per entry type, in encounter order
pub type TypeGroups = IndexMap<Option<String>, SubpackageGroups>;

/// Three-level grouping of entry texts
#[derive(Debug, Clone, Default)]
pub struct ReleaseGroups {
    releases: IndexMap<String, TypeGroups>,
}

impl ReleaseGroups {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Group entries, syncing each text with its pull request numbers
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut groups = Self::new();
        for entry in entries {
            groups.add_entry(entry);
        }
        debug!(
            entries = entries.len(),
            releases = groups.releases.len(),
            placements = groups.placement_count(),
            "entries grouped"
        );
        groups
    }

    /// Insert one entry into every release/type/subpackage combination
    pub fn add_entry(&mut self, entry: &Entry) {
        if entry.placements() == 0 {
            warn!(
                text = %entry.text.lines().next().unwrap_or_default(),
                "entry has no release, type or subpackage and is skipped"
            );
            return;
        }

        let text = with_marker(&entry.text, &entry.pull_requests);
        for release in &entry.releases {
            for entry_type in &entry.entry_types {
                for subpackage in &entry.subpackages {
                    self.insert(
                        release,
                        entry_type.as_deref(),
                        subpackage.as_deref(),
                        text.clone(),
                    );
                }
            }
        }
    }

    /// Append a text to a single group, creating missing levels
    pub fn insert(
        &mut self,
        release: &str,
        entry_type: Option<&str>,
        subpackage: Option<&str>,
        text: String,
    ) {
        self.releases
            .entry(release.to_string())
            .or_default()
            .entry(entry_type.map(str::to_string))
            .or_default()
            .entry(subpackage.map(str::to_string))
            .or_default()
            .push(text);
    }

    /// Type groups of one release
    pub fn get(&self, release: &str) -> Option<&TypeGroups> {
        self.releases.get(release)
    }

    /// Releases sorted by identifier, highest first.
    ///
    /// The comparison is lexicographic, so `"10.0"` sorts below `"9.0"`.
    pub fn releases_descending(&self) -> Vec<(&str, &TypeGroups)> {
        let mut releases: Vec<(&str, &TypeGroups)> = self
            .releases
            .iter()
            .map(|(release, types)| (release.as_str(), types))
            .collect();
        releases.sort_by(|a, b| b.0.cmp(a.0));
        releases
    }

    /// Total number of texts across all groups
    pub fn placement_count(&self) -> usize {
        self.releases
            .values()
            .flat_map(|types| types.values())
            .flat_map(|subpackages| subpackages.values())
            .map(Vec::len)
            .sum()
    }

    /// Check if nothing was grouped
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}
