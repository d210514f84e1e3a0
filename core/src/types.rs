//! Parsed argument model.
//!
//! A [`ParseResult`] buckets every token of a command line into long
//! options, short options, or positional arguments. Option values are
//! either a bare presence flag or an explicit string, modelled by
//! [`ArgValue`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value attached to a long or short option.
///
/// `--verbose` and `-v` produce [`ArgValue::Flag`]; `--name=value` and
/// `-k=value` produce [`ArgValue::Value`]. On the wire a flag is the
/// boolean `true` and a value is a plain string.
///
/// # Examples
///
/// ```
/// use cmdline_args_core::ArgValue;
///
/// let flag = ArgValue::Flag;
/// assert_eq!(serde_json::to_string(&flag).unwrap(), "true");
///
/// let value = ArgValue::from("baz");
/// assert_eq!(value.as_str(), Some("baz"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawValue", into = "RawValue")]
pub enum ArgValue {
    /// Option was present without an explicit value.
    Flag,
    /// Option carried an explicit value after `=`.
    Value(String),
}

impl ArgValue {
    /// Returns the explicit string value, or `None` for a bare flag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Flag => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Returns `true` for a bare presence flag.
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl std::fmt::Display for ArgValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => f.write_str("true"),
            Self::Value(value) => f.write_str(value),
        }
    }
}

/// Serialized shape of [`ArgValue`].
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Str(String),
}

impl From<ArgValue> for RawValue {
    fn from(value: ArgValue) -> Self {
        match value {
            ArgValue::Flag => Self::Bool(true),
            ArgValue::Value(value) => Self::Str(value),
        }
    }
}

impl TryFrom<RawValue> for ArgValue {
    type Error = String;

    fn try_from(raw: RawValue) -> Result<Self, Self::Error> {
        match raw {
            RawValue::Bool(true) => Ok(Self::Flag),
            RawValue::Bool(false) => Err("option flags are never `false`".to_string()),
            RawValue::Str(value) => Ok(Self::Value(value)),
        }
    }
}

/// Structured form of a command line.
///
/// Keys in [`long`](ParseResult::long) and [`short`](ParseResult::short)
/// are unique; a repeated option keeps its last value.
/// [`opts`](ParseResult::opts) keeps positional arguments in input order,
/// duplicates included.
///
/// # Examples
///
/// ```
/// use cmdline_args_core::{ArgParser, ArgValue};
///
/// let result = ArgParser::default().parse(["--foo", "--bar=baz", "-ab", "file.txt"]);
/// assert_eq!(result.long["foo"], ArgValue::Flag);
/// assert_eq!(result.long["bar"], ArgValue::from("baz"));
/// assert_eq!(result.short.len(), 2);
/// assert_eq!(result.opts, vec!["file.txt"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Long options (`--foo`, `--foo=bar`) keyed by name.
    #[serde(default)]
    pub long: BTreeMap<String, ArgValue>,
    /// Short options (`-a`, `-k=value`) keyed by their single character.
    #[serde(default)]
    pub short: BTreeMap<String, ArgValue>,
    /// Positional arguments in input order.
    #[serde(default)]
    pub opts: Vec<String>,
}

impl ParseResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an option by name, long options first.
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.long.get(key).or_else(|| self.short.get(key))
    }

    /// Returns `true` when no token was classified.
    pub fn is_empty(&self) -> bool {
        self.long.is_empty() && self.short.is_empty() && self.opts.is_empty()
    }

    /// Total number of recorded options and positional arguments.
    pub fn len(&self) -> usize {
        self.long.len() + self.short.len() + self.opts.len()
    }
}
