//! Boolean coercion of option values.
//!
//! Human-friendly spellings such as `yes`, `off` or `1` map to a strict
//! boolean. Anything unrecognised falls back to the caller's default.

use crate::config::LookupOrder;
use crate::types::{ArgValue, ParseResult};

/// Recognised spellings, compared after lower-casing.
const BOOLEAN_WORDS: &[(&str, bool)] = &[
    ("y", true),
    ("n", false),
    ("yes", true),
    ("no", false),
    ("true", true),
    ("false", false),
    ("1", true),
    ("0", false),
    ("on", true),
    ("off", false),
];

/// Maps a word from the fixed truthy/falsy table, case-insensitively.
///
/// # Examples
///
/// ```
/// use cmdline_args_core::parse_bool_word;
///
/// assert_eq!(parse_bool_word("YES"), Some(true));
/// assert_eq!(parse_bool_word("off"), Some(false));
/// assert_eq!(parse_bool_word("maybe"), None);
/// ```
pub fn parse_bool_word(word: &str) -> Option<bool> {
    let lowered = word.to_lowercase();
    BOOLEAN_WORDS
        .iter()
        .find(|(candidate, _)| *candidate == lowered)
        .map(|(_, value)| *value)
}

/// Coerces a single option value, falling back to `default`.
pub fn coerce_bool(value: &ArgValue, default: bool) -> bool {
    match value {
        ArgValue::Flag => true,
        ArgValue::Value(word) => parse_bool_word(word).unwrap_or(default),
    }
}

/// Looks `key` up in both option maps in the given order and coerces it.
///
/// Positional arguments are never consulted.
pub fn lookup_boolean(result: &ParseResult, key: &str, default: bool, order: LookupOrder) -> bool {
    let (first, second) = match order {
        LookupOrder::LongFirst => (&result.long, &result.short),
        LookupOrder::ShortFirst => (&result.short, &result.long),
    };
    match first.get(key).or_else(|| second.get(key)) {
        Some(value) => coerce_bool(value, default),
        None => default,
    }
}

impl ParseResult {
    /// Coerces option `key` to a boolean, long options first.
    ///
    /// Returns `default` when the key is absent or its value is not a
    /// recognised truthy/falsy word.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmdline_args_core::ArgParser;
    ///
    /// let result = ArgParser::default().parse(["--flag=yes", "--color=off", "-q"]);
    /// assert!(result.get_boolean("flag", false));
    /// assert!(!result.get_boolean("color", true));
    /// assert!(result.get_boolean("q", false));
    /// assert!(result.get_boolean("missing", true));
    /// ```
    pub fn get_boolean(&self, key: &str, default: bool) -> bool {
        lookup_boolean(self, key, default, LookupOrder::LongFirst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_word() {
        for word in ["y", "yes", "true", "1", "on"] {
            assert_eq!(parse_bool_word(word), Some(true), "{word}");
        }
        for word in ["n", "no", "false", "0", "off"] {
            assert_eq!(parse_bool_word(word), Some(false), "{word}");
        }
    }

    #[test]
    fn test_words_are_case_insensitive() {
        assert_eq!(parse_bool_word("On"), Some(true));
        assert_eq!(parse_bool_word("FALSE"), Some(false));
    }

    #[test]
    fn test_unknown_word_uses_default() {
        assert!(coerce_bool(&ArgValue::from("maybe"), true));
        assert!(!coerce_bool(&ArgValue::from("maybe"), false));
        assert!(!coerce_bool(&ArgValue::from(""), false));
        assert!(!coerce_bool(&ArgValue::from(" yes"), false));
    }

    #[test]
    fn test_flag_is_true_regardless_of_default() {
        assert!(coerce_bool(&ArgValue::Flag, false));
    }

    #[test]
    fn test_lookup_order() {
        let mut result = ParseResult::new();
        result.long.insert("v".to_string(), ArgValue::from("off"));
        result.short.insert("v".to_string(), ArgValue::Flag);

        assert!(!lookup_boolean(&result, "v", true, LookupOrder::LongFirst));
        assert!(lookup_boolean(&result, "v", false, LookupOrder::ShortFirst));
    }

    #[test]
    fn test_positionals_are_not_looked_up() {
        let mut result = ParseResult::new();
        result.opts.push("yes".to_string());
        assert!(!result.get_boolean("yes", false));
        assert!(!result.get_boolean("0", false));
    }

    #[test]
    fn test_absent_key_returns_default() {
        let result = ParseResult::new();
        assert!(result.get_boolean("missing", true));
        assert!(!result.get_boolean("missing", false));
    }
}
