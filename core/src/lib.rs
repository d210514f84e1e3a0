//! Raw command-line argument parsing.
//!
//! This crate turns process invocation tokens into a [`ParseResult`]:
//!
//! - `long` — `--foo` (a flag) and `--foo=bar` (a value).
//! - `short` — `-abc` (one flag per character) and `-k=value`.
//! - `opts` — every other token, in order.
//!
//! Tokens ending in a backslash are first re-joined with the next token
//! ([`join_escaped`]), so `Jan\ Kowalski` split by a naive tokenizer comes
//! back as one argument. Option values lose one layer of matching double
//! and then single quotes ([`strip_quotes`]).
//!
//! Parsing is total: every input produces a result. Boolean lookups
//! ([`ParseResult::get_boolean`], [`get_boolean`]) map `yes`/`no`,
//! `on`/`off`, `1`/`0` and friends to a strict `bool`.
//!
//! Two styles are supported. [`ArgParser`] is pure and the caller keeps the
//! result. The free functions [`parse`] and [`get_boolean`] keep the last
//! result in a process-wide cache for callers that want implicit lookup.
//!
//! # Example
//!
//! ```
//! use cmdline_args_core::*;
//!
//! let result = ArgParser::default().parse(["--name=\"John Doe\"", "-v", "-k=on", "in.txt"]);
//!
//! assert_eq!(result.long["name"], ArgValue::from("John Doe"));
//! assert_eq!(result.short["k"], ArgValue::from("on"));
//! assert!(result.get_boolean("k", false));
//! assert_eq!(result.opts, vec!["in.txt"]);
//! ```

mod cache;
mod classify;
mod coerce;
mod config;
mod error;
mod input;
mod join;
mod output;
mod types;

pub use cache::{
    clear_cache, get_boolean, last_result, parse, parse_env, parse_line, parse_with,
};
pub use classify::{ArgParser, strip_quotes};
pub use coerce::{coerce_bool, lookup_boolean, parse_bool_word};
pub use config::{LookupOrder, ParserConfig, TrailingEscape};
pub use error::{ArgsError, Result};
pub use input::ArgSource;
pub use join::{ESCAPE_MARKER, join_escaped};
pub use output::{OutputFormat, format_result};
pub use types::*;
