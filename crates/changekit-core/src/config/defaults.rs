//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "changekit.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "changekit.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".changekit.toml",
        ".changekit.yaml",
    ]
}

/// Namespace prefix carried by subpackage headers
pub const DEFAULT_NAMESPACE_PREFIX: &str = "astropy.";

/// Entry-type sections in the order they are written.
///
/// Includes the legacy spellings found in older release notes.
pub const DEFAULT_ENTRY_TYPE_ORDER: &[Option<&str>] = &[
    Some("New Features"),
    Some("API Changes"),
    Some("API changes"),
    Some("Performance Improvements"),
    Some("Bug Fixes"),
    Some("Bug fixes"),
    Some("Miscellaneous"),
    Some("General"),
    Some("Other Changes and Additions"),
    None,
];

/// Entry types accepted for new entries
pub const DEFAULT_ALLOWED_ENTRY_TYPES: &[&str] = &[
    "New Features",
    "API Changes",
    "Performance Improvements",
    "Bug Fixes",
    "Other Changes",
];

/// Subpackage headers that never carry the namespace prefix
pub const DEFAULT_UNPREFIXED_SUBPACKAGES: &[&str] = &["Installation", "Misc"];

/// Subpackages listed in the data-format instructions, without the prefix
pub const DEFAULT_SUGGESTED_SUBPACKAGES: &[&str] = &[
    "config",
    "constants",
    "convolution",
    "coordinates",
    "cosmology",
    "io.ascii",
    "io.fits",
    "io.misc",
    "io.registry",
    "io.votable",
    "logger",
    "modeling",
    "nddata",
    "samp",
    "stats",
    "table",
    "tests",
    "time",
    "timeseries",
    "uncertainty",
    "units",
    "utils",
    "visualization",
    "wcs",
];
