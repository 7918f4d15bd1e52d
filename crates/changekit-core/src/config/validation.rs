//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_layout(config)?;
    validate_markup(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_layout(config: &Config) -> Result<()> {
    let layout = &config.layout;

    if layout.namespace_prefix.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidValue {
            field: "layout.namespace_prefix".to_string(),
            message: "prefix cannot contain whitespace".to_string(),
        }
        .into());
    }

    if layout.entry_type_order.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "layout.entry_type_order".to_string(),
            message: "at least one entry type is required".to_string(),
        }
        .into());
    }

    for (i, entry_type) in layout.entry_type_order.iter().enumerate() {
        if entry_type.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: format!("layout.entry_type_order[{}]", i),
                message: "entry type cannot be blank".to_string(),
            }
            .into());
        }
    }

    for (i, subpackage) in layout.suggested_subpackages.iter().enumerate() {
        if subpackage.trim().is_empty() || subpackage.contains(',') {
            return Err(ConfigError::InvalidValue {
                field: format!("layout.suggested_subpackages[{}]", i),
                message: "subpackage must be a non-blank name without commas".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_markup(config: &Config) -> Result<()> {
    // Room for the two-column bullet indent plus one character.
    if config.markup.line_width.is_some_and(|w| w < 3) {
        return Err(ConfigError::InvalidValue {
            field: "markup.line_width".to_string(),
            message: "must be at least 3".to_string(),
        }
        .into());
    }

    Ok(())
}
