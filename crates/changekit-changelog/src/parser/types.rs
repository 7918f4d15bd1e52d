//! Parser configuration types

/// Options shared by the changelog parsers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Stop once this many entries have been read
    pub max_entries: Option<usize>,
}

impl ParserOptions {
    /// Create options with no limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of entries read
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    /// Check whether the entry cap has been reached
    pub fn limit_reached(&self, count: usize) -> bool {
        self.max_entries.is_some_and(|max| count >= max)
    }
}
