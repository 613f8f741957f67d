//! Lexer configuration.
//!
//! The defaults describe the standard nuc grammar. A driver can load
//! overrides from a TOML table:
//!
//! ```toml
//! signed_numbers = true
//! exponents = false
//! radix_prefixes = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`LexConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text is not a valid lexer table.
    #[error("Invalid lexer configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Grammar switches for numeric literals.
///
/// Every field defaults to `true`; missing keys in a TOML table keep their
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexConfig {
    /// Fold a prefix-position `-` into the number that follows it.
    #[serde(default = "default_true")]
    pub signed_numbers: bool,

    /// Recognize `e`/`E` exponents in decimal literals.
    #[serde(default = "default_true")]
    pub exponents: bool,

    /// Recognize `0x`, `0b` and `0o` radix prefixes.
    #[serde(default = "default_true")]
    pub radix_prefixes: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            signed_numbers: true,
            exponents: true,
            radix_prefixes: true,
        }
    }
}

impl LexConfig {
    /// Parses a configuration from TOML text.
    ///
    /// ```
    /// use nuc_lex::LexConfig;
    ///
    /// let config = LexConfig::from_toml_str("exponents = false").unwrap();
    /// assert!(!config.exponents);
    /// assert!(config.signed_numbers);
    /// ```
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> String {
        // Three booleans always serialize.
        toml::to_string(self).unwrap_or_default()
    }
}
