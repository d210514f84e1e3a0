//! Process-wide cache of the most recent parse.
//!
//! The free functions here mirror the classic implicit API: [`parse`]
//! stores its result, and [`get_boolean`] reads it back without the caller
//! threading the result through. Access goes through an `RwLock`, so
//! concurrent callers see either the old or the new result, never a mix.
//! Last writer wins. Prefer [`ArgParser`] with
//! [`ParseResult::get_boolean`] when the result can be passed explicitly.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::classify::ArgParser;
use crate::coerce::lookup_boolean;
use crate::config::LookupOrder;
use crate::input::ArgSource;
use crate::types::ParseResult;

struct Cached {
    result: ParseResult,
    lookup: LookupOrder,
}

static LAST: RwLock<Option<Cached>> = RwLock::new(None);

// The guarded value is plain data, so a panic mid-write cannot leave it
// half-updated; recover from poisoning instead of propagating it.
fn read() -> RwLockReadGuard<'static, Option<Cached>> {
    LAST.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write() -> RwLockWriteGuard<'static, Option<Cached>> {
    LAST.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Parses `source` with the default configuration and caches the result.
///
/// # Examples
///
/// ```
/// use cmdline_args_core::{ArgValue, get_boolean, parse};
///
/// let result = parse(["--flag=yes", "input"]);
/// assert_eq!(result.long["flag"], ArgValue::from("yes"));
/// assert!(get_boolean("flag", false));
/// ```
pub fn parse(source: impl Into<ArgSource>) -> ParseResult {
    parse_with(&ArgParser::default(), source)
}

/// Splits `line` on literal spaces, parses it, and caches the result.
///
/// # Examples
///
/// ```
/// use cmdline_args_core::{ArgValue, parse_line};
///
/// let result = parse_line("--name=Jan\\ Kowalski -v");
/// assert_eq!(result.long["name"], ArgValue::from("Jan Kowalski"));
/// ```
pub fn parse_line(line: &str) -> ParseResult {
    parse(ArgSource::Line(line.to_string()))
}

/// Parses the host process arguments, program name excluded.
pub fn parse_env() -> ParseResult {
    parse(ArgSource::Process)
}

/// Parses `source` with a configured parser and caches the result.
pub fn parse_with(parser: &ArgParser, source: impl Into<ArgSource>) -> ParseResult {
    let result = parser.parse(source.into().into_tokens());
    let mut slot = write();
    if slot.is_some() {
        debug!("replacing cached parse result");
    }
    *slot = Some(Cached {
        result: result.clone(),
        lookup: parser.config().lookup,
    });
    result
}

/// Coerces a cached option to a boolean.
///
/// Returns `default` before the first parse, when the key is absent, or
/// when its value is not a recognised truthy/falsy word.
pub fn get_boolean(key: &str, default: bool) -> bool {
    match read().as_ref() {
        Some(cached) => lookup_boolean(&cached.result, key, default, cached.lookup),
        None => default,
    }
}

/// Returns a copy of the cached result, if any parse has run.
pub fn last_result() -> Option<ParseResult> {
    read().as_ref().map(|cached| cached.result.clone())
}

/// Forgets the cached result.
pub fn clear_cache() {
    *write() = None;
}
