//! Output formatting for parse results.

use crate::error::Result;
use crate::types::{ArgValue, ParseResult};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML document.
    Yaml,
    /// Aligned plain-text sections for terminals.
    Table,
}

/// Formats a parse result in the requested output format.
///
/// # Errors
///
/// Returns [`JsonError`](crate::ArgsError::JsonError) or
/// [`YamlError`](crate::ArgsError::YamlError) if serialization fails.
pub fn format_result(result: &ParseResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(result)?),
        OutputFormat::Table => Ok(result_to_table(result)),
    }
}

fn result_to_table(result: &ParseResult) -> String {
    let mut out = String::new();

    let width = result
        .long
        .keys()
        .map(|key| key.chars().count() + 2)
        .chain(result.short.keys().map(|key| key.chars().count() + 1))
        .max()
        .unwrap_or(0);

    out.push_str("LONG\n");
    for (key, value) in &result.long {
        push_row(&mut out, &format!("--{key}"), value, width);
    }

    out.push_str("\nSHORT\n");
    for (key, value) in &result.short {
        push_row(&mut out, &format!("-{key}"), value, width);
    }

    out.push_str("\nOPTS\n");
    for (index, arg) in result.opts.iter().enumerate() {
        out.push_str(&format!("  [{index}] {arg}\n"));
    }

    out
}

fn push_row(out: &mut String, name: &str, value: &ArgValue, width: usize) {
    let rendered = match value {
        ArgValue::Flag => "true".to_string(),
        ArgValue::Value(value) => format!("{value:?}"),
    };
    out.push_str(&format!("  {name:<width$}  {rendered}\n"));
}
