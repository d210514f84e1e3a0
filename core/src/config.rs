//! Parser configuration.
//!
//! The defaults reproduce the classic behavior exactly; every field can be
//! omitted from YAML.
//!
//! # Example YAML
//!
//! ```yaml
//! trailing_escape: drop
//! strip_quotes: true
//! lookup: long_first
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What to do with an escaped fragment that is never terminated.
///
/// `["a\\"]` ends while still joining. [`Drop`](TrailingEscape::Drop)
/// discards the pending fragment; [`Keep`](TrailingEscape::Keep) emits it
/// as a final token, trailing space included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrailingEscape {
    #[default]
    Drop,
    Keep,
}

/// Map searched first when a boolean lookup finds the key in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LookupOrder {
    #[default]
    LongFirst,
    ShortFirst,
}

/// Settings for [`ArgParser`](crate::ArgParser).
///
/// # Examples
///
/// ```
/// use cmdline_args_core::{ParserConfig, TrailingEscape};
///
/// let config: ParserConfig = serde_yaml::from_str("trailing_escape: keep").unwrap();
/// assert_eq!(config.trailing_escape, TrailingEscape::Keep);
/// assert!(config.strip_quotes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Handling of an unterminated escaped fragment at the end of input.
    pub trailing_escape: TrailingEscape,
    /// Strip one layer of matching quotes from option values.
    pub strip_quotes: bool,
    /// Precedence for boolean lookups.
    pub lookup: LookupOrder,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            trailing_escape: TrailingEscape::Drop,
            strip_quotes: true,
            lookup: LookupOrder::LongFirst,
        }
    }
}

impl ParserConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ArgsError::IoError) if the file cannot be
    /// read, or [`YamlError`](crate::ArgsError::YamlError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ArgsError::IoError) if the file cannot be
    /// written, or [`YamlError`](crate::ArgsError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_complete() {
        let yaml = r#"
trailing_escape: keep
strip_quotes: false
lookup: short_first
"#;
        let config: ParserConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.trailing_escape, TrailingEscape::Keep);
        assert!(!config.strip_quotes);
        assert_eq!(config.lookup, LookupOrder::ShortFirst);
    }

    #[test]
    fn test_deserialize_empty_mapping_uses_defaults() {
        let config: ParserConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let err = serde_yaml::from_str::<ParserConfig>("trailing_escape: flush");
        assert!(err.is_err());
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parser.yml");

        let original = ParserConfig {
            trailing_escape: TrailingEscape::Keep,
            strip_quotes: false,
            lookup: LookupOrder::ShortFirst,
        };
        original.save(&path).unwrap();

        let loaded = ParserConfig::load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ParserConfig::load(dir.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, crate::ArgsError::IoError(_)));
    }
}
