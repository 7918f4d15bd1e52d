//! Changekit Core - shared foundations for changelog conversion
//!
//! This crate provides the error taxonomy and the layout configuration used by
//! the changelog parsers and formatters.

pub mod config;
pub mod error;

pub use config::{Config, DataConfig, LayoutConfig, MarkupConfig};
pub use error::{ChangekitError, ConfigError, FormatError, ParseError, Result, UsageError};
