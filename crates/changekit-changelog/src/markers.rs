//! Pull request markers embedded in entry text
//!
//! Entries end with a bracketed group such as `[#123, #456]`. The group may be
//! followed by periods and whitespace.

use regex::Regex;
use std::sync::LazyLock;

/// Bracketed group at the very end of the text
static MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\][.\s]*$").expect("Invalid regex"));

/// A single `#<digits>` token inside the group
static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)").expect("Invalid regex"));

/// Pull request numbers from the trailing marker, empty when there is none
pub fn pull_requests_in(text: &str) -> Vec<u64> {
    let Some(caps) = MARKER_REGEX.captures(text) else {
        return Vec::new();
    };

    NUMBER_REGEX
        .captures_iter(&caps[1])
        .filter_map(|c| c[1].parse().ok())
        .collect()
}

/// Render a marker for the given numbers, e.g. `[#1, #2]`
pub fn marker_for(pull_requests: &[u64]) -> String {
    let numbers: Vec<String> = pull_requests.iter().map(|pr| format!("#{}", pr)).collect();
    format!("[{}]", numbers.join(", "))
}

/// Text with a marker appended when the text has none but numbers are known
pub fn with_marker(text: &str, pull_requests: &[u64]) -> String {
    if pull_requests.is_empty() || !pull_requests_in(text).is_empty() {
        return text.to_string();
    }
    format!("{} {}", text, marker_for(pull_requests))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_marker() {
        assert_eq!(pull_requests_in("Added X. [#123, #124]"), vec![123, 124]);
    }

    #[test]
    fn test_marker_followed_by_period_and_newline() {
        assert_eq!(pull_requests_in("Fixed Y [#9].\n"), vec![9]);
    }

    #[test]
    fn test_marker_not_at_end() {
        assert!(pull_requests_in("See [#12] for details").is_empty());
    }

    #[test]
    fn test_group_without_numbers() {
        assert!(pull_requests_in("Uses the [docs]").is_empty());
    }

    #[test]
    fn test_no_marker() {
        assert!(pull_requests_in("Plain text.").is_empty());
    }

    #[test]
    fn test_marker_for() {
        assert_eq!(marker_for(&[1, 22]), "[#1, #22]");
    }

    #[test]
    fn test_with_marker_appends() {
        assert_eq!(with_marker("Fixed a bug.", &[7, 8]), "Fixed a bug. [#7, #8]");
    }

    #[test]
    fn test_with_marker_keeps_existing() {
        assert_eq!(with_marker("Fixed a bug. [#7]", &[7, 8]), "Fixed a bug. [#7]");
    }

    #[test]
    fn test_with_marker_without_numbers() {
        assert_eq!(with_marker("Fixed a bug.", &[]), "Fixed a bug.");
    }

    #[test]
    fn test_with_marker_is_idempotent() {
        let once = with_marker("Line one\nline two", &[42]);
        let twice = with_marker(&once, &[42]);
        assert_eq!(once, twice);
        assert_eq!(pull_requests_in(&once), vec![42]);
    }
}
