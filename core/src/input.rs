//! Input shapes accepted by the cached entry points.

use std::ffi::OsString;

/// Where the raw tokens come from.
///
/// # Examples
///
/// ```
/// use cmdline_args_core::ArgSource;
///
/// let source = ArgSource::from("--foo bar");
/// assert_eq!(source.into_tokens(), vec!["--foo", "bar"]);
///
/// let source = ArgSource::from(vec!["-v", "file"]);
/// assert_eq!(source.into_tokens(), vec!["-v", "file"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgSource {
    /// Already tokenized arguments, program name excluded.
    Tokens(Vec<String>),
    /// A single line split on literal spaces. Consecutive spaces yield
    /// empty tokens.
    Line(String),
    /// The host process arguments minus the program name. Arguments that
    /// are not valid UTF-8 are converted lossily.
    Process,
}

impl ArgSource {
    /// Resolves the source into its token list.
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            Self::Tokens(tokens) => tokens,
            Self::Line(line) => line.split(' ').map(String::from).collect(),
            Self::Process => os_args_to_tokens(std::env::args_os()),
        }
    }
}

/// Drops the program name and converts the rest with
/// [`OsStr::to_string_lossy`](std::ffi::OsStr::to_string_lossy).
fn os_args_to_tokens(args: impl IntoIterator<Item = OsString>) -> Vec<String> {
    args.into_iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

impl From<&str> for ArgSource {
    fn from(line: &str) -> Self {
        Self::Line(line.to_string())
    }
}

impl From<String> for ArgSource {
    fn from(line: String) -> Self {
        Self::Line(line)
    }
}

impl From<Vec<String>> for ArgSource {
    fn from(tokens: Vec<String>) -> Self {
        Self::Tokens(tokens)
    }
}

impl From<Vec<&str>> for ArgSource {
    fn from(tokens: Vec<&str>) -> Self {
        Self::Tokens(tokens.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for ArgSource {
    fn from(tokens: &[&str]) -> Self {
        Self::Tokens(tokens.iter().map(|token| token.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ArgSource {
    fn from(tokens: [&str; N]) -> Self {
        Self::Tokens(tokens.iter().map(|token| token.to_string()).collect())
    }
}
