//! Brace-aware list splitting

use crate::utils::error::{StateError, StateResult};

/// Split `text` on every top-level occurrence of `separator`.
///
/// Brace groups are atomic: a separator inside `{...}` does not split, and
/// the braces of a top-level group are dropped from the item, so
/// `a, {b,c}, d` yields `a`, `b,c` and `d`. Whitespace right after a
/// separator is skipped. `\{` and `\}` are kept verbatim and do not change
/// the depth; a separator directly after a backslash does not split either.
///
/// Empty input yields no items; otherwise there is always one more item
/// than top-level separators.
pub fn separate(text: &str, separator: &str) -> StateResult<Vec<String>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut escaped = false;
    let mut i = 0;

    while i < text.len() {
        let tail = &text[i..];
        if depth == 0 && !escaped && !separator.is_empty() && tail.starts_with(separator) {
            items.push(std::mem::take(&mut current));
            i += separator.len();
            i += skipped_whitespace(&text[i..]);
            continue;
        }

        let Some(c) = tail.chars().next() else {
            break;
        };
        i += c.len_utf8();

        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => {
                escaped = true;
                current.push(c);
            }
            '{' => {
                if depth > 0 {
                    current.push(c);
                }
                depth += 1;
            }
            '}' => {
                if depth == 0 {
                    return Err(StateError::ExtraCloseBrace(text.to_string()));
                }
                depth -= 1;
                if depth > 0 {
                    current.push(c);
                }
            }
            _ => current.push(c),
        }
    }

    if depth > 0 {
        return Err(StateError::MissingCloseBrace(text.to_string()));
    }
    items.push(current);
    Ok(items)
}

/// Byte length of the leading whitespace of `s`
fn skipped_whitespace(s: &str) -> usize {
    s.len() - s.trim_start().len()
}
