//! Token classification into long options, short options and positionals.
//!
//! Each joined token is matched against the following rules, first match
//! wins:
//!
//! 1. `--key` → long option flag
//! 2. `--key=value` → long option with value (split on the first `=`)
//! 3. `-k=value` → short option with value (`=` is the third character)
//! 4. `-abc` → one short option flag per character
//! 5. anything else → positional argument, kept verbatim
//!
//! Classification is total: every token lands in exactly one bucket, empty
//! keys included (`--`, `--=x`, `-`).

use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::join::join_escaped;
use crate::types::{ArgValue, ParseResult};

/// Converts raw tokens into a [`ParseResult`].
///
/// `ArgParser` holds no state besides its configuration, so parsing the
/// same input twice yields equal results. It never touches the shared
/// cache; see [`crate::parse`] for the cached entry points.
///
/// # Examples
///
/// ```
/// use cmdline_args_core::{ArgParser, ArgValue};
///
/// let parser = ArgParser::default();
/// let result = parser.parse(["--name=\"John Doe\"", "-k=value", "-xy", "input"]);
///
/// assert_eq!(result.long["name"], ArgValue::from("John Doe"));
/// assert_eq!(result.short["k"], ArgValue::from("value"));
/// assert_eq!(result.short["x"], ArgValue::Flag);
/// assert_eq!(result.opts, vec!["input"]);
/// assert!(result.get_boolean("x", false));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgParser {
    config: ParserConfig,
}

impl ArgParser {
    /// Creates a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Joins escaped tokens and classifies the result.
    pub fn parse<I, S>(&self, tokens: I) -> ParseResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<S> = tokens.into_iter().collect();
        let joined = join_escaped(&tokens, self.config.trailing_escape);
        self.classify(&joined)
    }

    /// Classifies already-joined tokens.
    pub fn classify<S: AsRef<str>>(&self, tokens: &[S]) -> ParseResult {
        let mut result = ParseResult::new();

        for token in tokens {
            let token = token.as_ref();
            if let Some(body) = token.strip_prefix("--") {
                match body.split_once('=') {
                    Some((key, value)) => {
                        trace!(key, value, "long option with value");
                        result.long.insert(key.to_string(), self.value(value));
                    }
                    None => {
                        trace!(key = body, "long option flag");
                        result.long.insert(body.to_string(), ArgValue::Flag);
                    }
                }
            } else if let Some(body) = token.strip_prefix('-') {
                let mut chars = body.chars();
                match (chars.next(), chars.next()) {
                    (Some(key), Some('=')) => {
                        let value = chars.as_str();
                        trace!(%key, value, "short option with value");
                        result.short.insert(key.to_string(), self.value(value));
                    }
                    _ if body.is_empty() => {
                        trace!("bare dash recorded as empty short option");
                        result.short.insert(String::new(), ArgValue::Flag);
                    }
                    _ => {
                        trace!(cluster = body, "short option cluster");
                        for key in body.chars() {
                            result.short.insert(key.to_string(), ArgValue::Flag);
                        }
                    }
                }
            } else {
                trace!(token, "positional argument");
                result.opts.push(token.to_string());
            }
        }

        debug!(
            long = result.long.len(),
            short = result.short.len(),
            opts = result.opts.len(),
            "classified arguments"
        );
        result
    }

    fn value(&self, raw: &str) -> ArgValue {
        if self.config.strip_quotes {
            ArgValue::Value(strip_quotes(raw).to_string())
        } else {
            ArgValue::Value(raw.to_string())
        }
    }
}

/// Removes one layer of matching double quotes, then one layer of matching
/// single quotes.
///
/// # Examples
///
/// ```
/// use cmdline_args_core::strip_quotes;
///
/// assert_eq!(strip_quotes("\"John Doe\""), "John Doe");
/// assert_eq!(strip_quotes("\"'both'\""), "both");
/// assert_eq!(strip_quotes("\"\"twice\"\""), "\"twice\"");
/// assert_eq!(strip_quotes("\"unbalanced"), "\"unbalanced");
/// ```
pub fn strip_quotes(value: &str) -> &str {
    strip_pair(strip_pair(value, '"'), '\'')
}

fn strip_pair(value: &str, quote: char) -> &str {
    value
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .unwrap_or(value)
}
