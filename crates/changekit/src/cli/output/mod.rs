//! Output formatting utilities

use changekit_changelog::Uniques;
use console::{style, Style};

use super::OutputFormat;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}

/// Labelled value lists, in print order
pub fn info_sections(uniques: &Uniques) -> Vec<(&'static str, Vec<String>)> {
    fn label(value: &Option<String>) -> String {
        value.as_deref().unwrap_or("None").to_string()
    }

    vec![
        ("Subpackages", uniques.subpackages.iter().map(label).collect()),
        ("Releases", uniques.releases.iter().cloned().collect()),
        ("Entry_Types", uniques.entry_types.iter().map(label).collect()),
    ]
}

/// Print the distinct subpackages, releases and entry types
pub fn print_info(uniques: &Uniques, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(uniques)?);
        }
        OutputFormat::Text => {
            for (title, values) in info_sections(uniques) {
                println!("{}", header(title));
                for value in values {
                    println!("  - {}", value);
                }
                println!();
            }
        }
    }
    Ok(())
}
