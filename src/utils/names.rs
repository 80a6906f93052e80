//! Control sequence name handling
//!
//! Names given to `\newcounter`, `\newbool`, `\DeclareListParser` and friends
//! must be either a single character or a run of ASCII letters, exactly like
//! the control sequences TeX itself can tokenize without `\csname`.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::{StateError, StateResult};

lazy_static! {
    /// A single character, or one or more letters
    static ref CS_NAME: Regex = Regex::new(r"(?i)^(?:.|[a-z]+)$").expect("valid regex");
}

/// Normalize a control sequence name.
///
/// Surrounding whitespace is trimmed and one leading backslash is removed.
/// With `require_backslash`, a name without the backslash fails
/// [`StateError::MissingControlSequence`].
///
/// # Arguments
/// * `raw` - The argument text as read from the document
/// * `command` - The calling command, used in error messages
/// * `require_backslash` - Whether `raw` must be written as `\name`
pub fn control_sequence_name(
    raw: &str,
    command: &str,
    require_backslash: bool,
) -> StateResult<String> {
    let cs = strip_control_sequence(raw, command, require_backslash)?;
    if !is_valid_name(cs) {
        return Err(StateError::illegal_name(command, cs));
    }
    Ok(cs.to_string())
}

/// Trim `raw` and remove one leading backslash, without validating the rest
pub fn strip_control_sequence<'a>(
    raw: &'a str,
    command: &str,
    require_backslash: bool,
) -> StateResult<&'a str> {
    let trimmed = raw.trim();
    match trimmed.strip_prefix('\\') {
        Some(rest) => Ok(rest),
        None if require_backslash => Err(StateError::MissingControlSequence(command.to_string())),
        None => Ok(trimmed),
    }
}

/// Check a name without the leading backslash
pub fn is_valid_name(name: &str) -> bool {
    CS_NAME.is_match(name)
}
