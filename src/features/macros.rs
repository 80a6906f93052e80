//! Macro argument reading
//!
//! Commands read their arguments one at a time through [`ArgumentSource`], the
//! only part of the host macro processor the command layer relies on.
//! [`ArgumentScanner`] is a source over plain LaTeX text, used by the CLI, the
//! WASM bindings and tests.

use crate::utils::error::{StateError, StateResult};

/// Where a command reads its arguments from
pub trait ArgumentSource {
    /// Next mandatory argument: the content of a `{...}` group, or a single
    /// token (`\name` or one character) when no group follows.
    fn argument(&mut self, command: &str) -> StateResult<String>;

    /// Optional `[...]` argument, or `default` when absent
    fn bracket_argument(&mut self, command: &str, default: &str) -> StateResult<String>;

    /// Consume a `*` marker if present
    fn star(&mut self, command: &str) -> bool;
}

/// Reads arguments from LaTeX source text
#[derive(Debug, Clone)]
pub struct ArgumentScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> ArgumentScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Text not consumed yet
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.pos += rest.len() - rest.trim_start().len();
    }
}

impl ArgumentSource for ArgumentScanner<'_> {
    fn argument(&mut self, command: &str) -> StateResult<String> {
        self.skip_whitespace();
        let rest = self.remaining();

        if rest.starts_with('{') {
            let (content, consumed) = extract_group(rest, '{', '}')
                .ok_or_else(|| StateError::MissingCloseBrace(rest.to_string()))?;
            self.pos += consumed;
            return Ok(content.to_string());
        }

        let (token, consumed) =
            extract_token(rest).ok_or_else(|| StateError::missing_argument(command))?;
        self.pos += consumed;
        Ok(token.to_string())
    }

    fn bracket_argument(&mut self, command: &str, default: &str) -> StateResult<String> {
        self.skip_whitespace();
        let rest = self.remaining();
        if !rest.starts_with('[') {
            return Ok(default.to_string());
        }

        let (content, consumed) = extract_group(rest, '[', ']')
            .ok_or_else(|| StateError::missing_argument(command))?;
        self.pos += consumed;
        Ok(content.to_string())
    }

    fn star(&mut self, _command: &str) -> bool {
        self.skip_whitespace();
        if self.remaining().starts_with('*') {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}

/// Extract a balanced `open ... close` group at the start of `input`.
///
/// Returns the inner text and the number of bytes consumed. A delimiter
/// preceded by a backslash does not count.
fn extract_group(input: &str, open: char, close: char) -> Option<(&str, usize)> {
    let mut depth = 0usize;
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            c if c == open => {
                if depth == 0 {
                    start = i + c.len_utf8();
                }
                depth += 1;
            }
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    return Some((&input[start..i], i + c.len_utf8()));
                }
            }
            _ => {}
        }
    }

    None
}

/// Extract a single token: `\letters`, `\` plus one character, or one character
fn extract_token(input: &str) -> Option<(&str, usize)> {
    let mut chars = input.char_indices();
    let (_, first) = chars.next()?;
    if first != '\\' {
        return Some((&input[..first.len_utf8()], first.len_utf8()));
    }

    let Some((_, second)) = chars.next() else {
        return Some((input, 1));
    };
    if !second.is_ascii_alphabetic() {
        let end = 1 + second.len_utf8();
        return Some((&input[..end], end));
    }
    let end = input[1..]
        .find(|c: char| !c.is_ascii_alphabetic())
        .map_or(input.len(), |n| n + 1);
    Some((&input[..end], end))
}

/// Parse a leading integer the way `\setcounter` reads its value.
///
/// Leading whitespace and an optional sign are accepted, digits are read up
/// to the first other character and anything after that is ignored. Input
/// without digits fails [`StateError::InvalidNumber`].
pub fn parse_int(text: &str) -> StateResult<i64> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return Err(StateError::invalid_number(text));
    }

    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return Err(StateError::invalid_number(text));
    }

    trimmed[..sign_len + digits_len]
        .parse::<i64>()
        .map_err(|_| StateError::invalid_number(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braced_arguments() {
        let mut args = ArgumentScanner::new("{section} { a {b} c }rest");
        assert_eq!(args.argument("\\cmd").unwrap(), "section");
        assert_eq!(args.argument("\\cmd").unwrap(), " a {b} c ");
        assert_eq!(args.remaining(), "rest");
    }

    #[test]
    fn test_single_token_arguments() {
        let mut args = ArgumentScanner::new(r"\mylist x\{");
        assert_eq!(args.argument("\\cmd").unwrap(), r"\mylist");
        assert_eq!(args.argument("\\cmd").unwrap(), "x");
        assert_eq!(args.argument("\\cmd").unwrap(), r"\{");
    }

    #[test]
    fn test_escaped_brace_inside_group() {
        let mut args = ArgumentScanner::new(r"{a\}b}");
        assert_eq!(args.argument("\\cmd").unwrap(), r"a\}b");
    }

    #[test]
    fn test_missing_arguments() {
        let mut args = ArgumentScanner::new("  ");
        assert_eq!(args.argument("\\cmd").unwrap_err().kind(), "MissingArgument");

        let mut args = ArgumentScanner::new("{open");
        assert_eq!(
            args.argument("\\cmd").unwrap_err(),
            StateError::MissingCloseBrace("{open".to_string())
        );

        let mut args = ArgumentScanner::new("{a}  {b {c}");
        args.argument("\\cmd").unwrap();
        assert_eq!(
            args.argument("\\cmd").unwrap_err(),
            StateError::MissingCloseBrace("{b {c}".to_string())
        );
    }

    #[test]
    fn test_bracket_argument() {
        let mut args = ArgumentScanner::new("[chapter]{x}");
        assert_eq!(args.bracket_argument("\\cmd", "").unwrap(), "chapter");
        assert_eq!(args.bracket_argument("\\cmd", "none").unwrap(), "none");
        assert_eq!(args.argument("\\cmd").unwrap(), "x");
    }

    #[test]
    fn test_star() {
        let mut args = ArgumentScanner::new(" *{a}");
        assert!(args.star("\\cmd"));
        assert!(!args.star("\\cmd"));
        assert_eq!(args.argument("\\cmd").unwrap(), "a");
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42").unwrap(), 42);
        assert_eq!(parse_int("  -7").unwrap(), -7);
        assert_eq!(parse_int("+3").unwrap(), 3);
        assert_eq!(parse_int("12abc").unwrap(), 12);
        assert_eq!(parse_int("3.9").unwrap(), 3);
    }

    #[test]
    fn test_parse_int_rejects() {
        for text in ["", "abc", "-", "--1", "+-2", "99999999999999999999"] {
            assert_eq!(
                parse_int(text).unwrap_err().kind(),
                "InvalidNumber",
                "input {:?}",
                text
            );
        }
    }
}
