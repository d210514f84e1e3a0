use std::sync::{Mutex, MutexGuard};

use cmdline_args_core::{
    ArgParser, ArgSource, ArgValue, OutputFormat, ParseResult, ParserConfig, TrailingEscape,
    clear_cache, format_result, get_boolean, last_result, parse, parse_with,
};

/// Tests sharing the process-wide cache run one at a time.
static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn long_flag_and_value() {
    let _guard = serial();
    let result = parse(["--foo", "--bar=baz"]);
    assert_eq!(result.long.len(), 2);
    assert_eq!(result.long["foo"], ArgValue::Flag);
    assert_eq!(result.long["bar"], ArgValue::from("baz"));
}

#[test]
fn short_cluster_and_value() {
    let _guard = serial();
    let result = parse(["-abc", "-k=value"]);
    assert_eq!(
        result.short.keys().collect::<Vec<_>>(),
        vec!["a", "b", "c", "k"]
    );
    assert_eq!(result.short["k"], ArgValue::from("value"));
}

#[test]
fn positionals_only() {
    let _guard = serial();
    let result = parse(["arg1", "arg2", "arg3"]);
    assert_eq!(result.opts, vec!["arg1", "arg2", "arg3"]);
    assert!(result.long.is_empty());
    assert!(result.short.is_empty());
}

#[test]
fn quoted_value_is_unwrapped() {
    let _guard = serial();
    let result = parse(["--name=\"John Doe\""]);
    assert_eq!(result.long["name"], ArgValue::from("John Doe"));
}

#[test]
fn later_value_wins() {
    let _guard = serial();
    let result = parse(["--foo=1", "--foo=2"]);
    assert_eq!(result.long.len(), 1);
    assert_eq!(result.long["foo"], ArgValue::from("2"));
}

#[test]
fn positionals_are_an_ordered_subsequence_of_input() {
    let tokens = ["x", "--a", "y", "-b", "x", "--c=d", "z"];
    let result = ArgParser::default().parse(tokens);
    let plain: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|token| !token.starts_with('-'))
        .collect();
    assert_eq!(result.opts, plain);
}

#[test]
fn parsing_twice_is_structurally_equal() {
    let tokens = ["--a=\"q\"", "-bc", "Jan\\", "Kowalski", "-d=1"];
    let parser = ArgParser::default();
    assert_eq!(parser.parse(tokens), parser.parse(tokens));
}

// ---------------------------------------------------------------------------
// Escape joining
// ---------------------------------------------------------------------------

#[test]
fn escaped_space_joins_positional() {
    let _guard = serial();
    let result = parse(["Jan\\", "Kowalski"]);
    assert_eq!(result.opts, vec!["Jan Kowalski"]);
}

#[test]
fn dangling_escape_is_dropped_by_default() {
    let _guard = serial();
    let result = parse(["first", "dangling\\"]);
    assert_eq!(result.opts, vec!["first"]);
}

#[test]
fn dangling_escape_can_be_kept() {
    let parser = ArgParser::new(ParserConfig {
        trailing_escape: TrailingEscape::Keep,
        ..ParserConfig::default()
    });
    let result = parser.parse(["first", "dangling\\"]);
    assert_eq!(result.opts, vec!["first", "dangling "]);
}

// ---------------------------------------------------------------------------
// Boolean coercion through the cache
// ---------------------------------------------------------------------------

#[test]
fn cached_boolean_lookup() {
    let _guard = serial();
    parse(["--flag=yes"]);
    assert!(get_boolean("flag", false));

    parse(["--flag=off"]);
    assert!(!get_boolean("flag", true));

    assert!(get_boolean("missing", true));
    assert!(!get_boolean("missing", false));
}

#[test]
fn cached_boolean_before_parse_uses_default() {
    let _guard = serial();
    clear_cache();
    assert!(get_boolean("anything", true));
    assert!(last_result().is_none());
}

#[test]
fn cache_holds_exactly_the_returned_result() {
    let _guard = serial();
    let parser = ArgParser::new(ParserConfig::default());
    let result = parse_with(&parser, "--a -b c");
    assert_eq!(last_result(), Some(result));
}

#[test]
fn explicit_result_needs_no_cache() {
    let result = ArgParser::default().parse(["--color=ON", "--quiet=0", "--level=3"]);
    assert!(result.get_boolean("color", false));
    assert!(!result.get_boolean("quiet", true));
    assert!(result.get_boolean("level", true));
    assert!(!result.get_boolean("level", false));
}

// ---------------------------------------------------------------------------
// Sources and output
// ---------------------------------------------------------------------------

#[test]
fn line_source_splits_on_spaces() {
    let _guard = serial();
    let result = parse(ArgSource::from("--x=1 -y  z"));
    assert_eq!(result.long["x"], ArgValue::from("1"));
    assert_eq!(result.short["y"], ArgValue::Flag);
    assert_eq!(result.opts, vec!["", "z"]);
}

#[test]
fn json_output_round_trips_through_serde() {
    let result = ArgParser::default().parse(["--foo", "--bar=baz", "-k=v", "pos"]);
    let json = format_result(&result, OutputFormat::Json).unwrap();
    let back: ParseResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
