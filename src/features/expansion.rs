//! Command results handed back to the host

use std::fmt;

/// What a command expands to
///
/// The host decides how to typeset each variant; `Tokens` and the selected
/// branch of `Branch` are TeX source to push back into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// Commands that only change state
    Nothing,
    /// Plain letters, e.g. `\alph` output
    Text(String),
    /// Symbolic output such as digits or footnote symbols
    Math(String),
    /// Internal integer, e.g. `\value`
    Number(i64),
    /// TeX source to re-inject
    Tokens(String),
    /// Result of a conditional
    Branch {
        condition: bool,
        if_true: String,
        if_false: String,
    },
}

impl Expansion {
    /// Build the output of a formatting command
    pub fn formatted(output: String) -> Self {
        if output.chars().all(|c| c.is_ascii_alphabetic()) {
            Expansion::Text(output)
        } else {
            Expansion::Math(output)
        }
    }

    /// The source of the branch that was taken, or `None` for other variants
    pub fn selected(&self) -> Option<&str> {
        match self {
            Expansion::Branch {
                condition,
                if_true,
                if_false,
            } => Some(if *condition { if_true } else { if_false }),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Expansion::Nothing => "nothing",
            Expansion::Text(_) => "text",
            Expansion::Math(_) => "math",
            Expansion::Number(_) => "number",
            Expansion::Tokens(_) => "tokens",
            Expansion::Branch { .. } => "branch",
        }
    }
}

/// Writes what the host would push back into the document
impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expansion::Nothing => Ok(()),
            Expansion::Text(s) | Expansion::Math(s) | Expansion::Tokens(s) => f.write_str(s),
            Expansion::Number(n) => write!(f, "{}", n),
            Expansion::Branch { .. } => f.write_str(self.selected().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_classifies_output() {
        assert_eq!(Expansion::formatted("xiv".into()), Expansion::Text("xiv".into()));
        assert_eq!(Expansion::formatted("14".into()), Expansion::Math("14".into()));
        assert_eq!(
            Expansion::formatted("\u{2020}".into()),
            Expansion::Math("\u{2020}".into())
        );
        assert_eq!(Expansion::formatted(String::new()), Expansion::Text(String::new()));
    }

    #[test]
    fn test_selected_branch() {
        let branch = Expansion::Branch {
            condition: false,
            if_true: "yes".into(),
            if_false: "no".into(),
        };
        assert_eq!(branch.selected(), Some("no"));
        assert_eq!(branch.to_string(), "no");
        assert_eq!(Expansion::Number(3).selected(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Expansion::Nothing.to_string(), "");
        assert_eq!(Expansion::Number(-2).to_string(), "-2");
        assert_eq!(Expansion::Tokens("\\do{a}".into()).to_string(), "\\do{a}");
    }
}
