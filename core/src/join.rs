//! Re-joining of tokens split on escaped spaces.
//!
//! Shells that do not understand `\ ` hand `Jan\ Kowalski` over as the two
//! tokens `Jan\` and `Kowalski`. A token ending in a backslash is glued to
//! the next one with a single space.

use tracing::debug;

use crate::config::TrailingEscape;

/// Escape marker closing a fragment that continues in the next token.
pub const ESCAPE_MARKER: char = '\\';

/// Joins tokens whose predecessor ends with [`ESCAPE_MARKER`].
///
/// The output never has more elements than the input. A fragment still
/// pending when the input runs out is handled per `trailing`.
///
/// # Examples
///
/// ```
/// use cmdline_args_core::{TrailingEscape, join_escaped};
///
/// let joined = join_escaped(&["Jan\\", "Kowalski", "-v"], TrailingEscape::Drop);
/// assert_eq!(joined, vec!["Jan Kowalski", "-v"]);
/// ```
pub fn join_escaped<S: AsRef<str>>(tokens: &[S], trailing: TrailingEscape) -> Vec<String> {
    let mut joined = Vec::with_capacity(tokens.len());
    let mut pending = String::new();

    for token in tokens {
        let token = token.as_ref();
        if let Some(fragment) = token.strip_suffix(ESCAPE_MARKER) {
            pending.push_str(fragment);
            pending.push(' ');
        } else if pending.is_empty() {
            joined.push(token.to_string());
        } else {
            pending.push_str(token);
            joined.push(std::mem::take(&mut pending));
        }
    }

    if !pending.is_empty() {
        match trailing {
            TrailingEscape::Drop => {
                debug!(fragment = %pending, "dropping unterminated escaped fragment");
            }
            TrailingEscape::Keep => joined.push(pending),
        }
    }

    joined
}
