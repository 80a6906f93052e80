//! # texstate
//!
//! Counter, flag and list state for LaTeX macro processors, following the
//! LaTeX `counter` commands and the `etoolbox` package.
//!
//! ## Features
//!
//! - **Counters**: reset hierarchies with `\counterwithin`/`\counterwithout`
//!   and cascading `\stepcounter`
//! - **Flags**: etoolbox bools and toggles in separate namespaces
//! - **Lists**: ordered lists and brace-aware list parsers
//! - **Expressions**: `\numexpr`-style integer arithmetic
//! - **Numerals**: arabic, roman, alphabetic and footnote-symbol formatting
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Running commands
//!
//! ```rust
//! use texstate::{Expansion, Session};
//!
//! let mut session = Session::new();
//! session.invoke("newcounter", "{chapter}").unwrap();
//! session.invoke("newcounter", "{section}[chapter]").unwrap();
//! session.invoke("counterwithin", "{section}{chapter}").unwrap();
//! session.invoke("stepcounter", "{chapter}").unwrap();
//! session.invoke("stepcounter", "{section}").unwrap();
//!
//! let the = session.invoke("thesection", "").unwrap();
//! assert_eq!(the, Expansion::Math("1.1".to_string()));
//! ```
//!
//! ### Using the stores directly
//!
//! ```rust
//! use texstate::{evaluate_integer, separate_list};
//!
//! assert_eq!(evaluate_integer("(2+3)*4").unwrap(), 20);
//! assert_eq!(separate_list("a, {b,c}, d", ",").unwrap(), vec!["a", "b,c", "d"]);
//! ```

/// Core state modules
pub mod core;

/// Data layer - numeral tables and the command table
pub mod data;

/// Feature modules - the command layer
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core modules
pub use core::{counters, flags, lists, numexpr, session};
pub use core::{
    Counter, CounterId, CounterRegistry, DivisionMode, FlagKind, FlagStore, ListLoop,
    ListParser, ListStore, RenderMode, Session, SessionOptions,
};

// Re-export data modules
pub use data::commands;
pub use data::numerals;

// Re-export feature modules
pub use features::{ArgumentScanner, ArgumentSource, Expansion};

// Re-export utilities
pub use utils::error::{StateError, StateResult};

use data::commands::{Command, COMMANDS};

/// Evaluate an integer expression, rounding like `\numexpr`
///
/// # Arguments
/// * `input` - Expression such as `2*(3+4)`
///
/// # Returns
/// The rounded integer value
pub fn evaluate_integer(input: &str) -> StateResult<i64> {
    core::numexpr::numexpr(input, DivisionMode::default())
}

/// Format `n` the way the formatting command `style` would, e.g. `"Roman"`
///
/// Fails with `UnknownCommand` if `style` is not one of `arabic`, `roman`,
/// `Roman`, `alph`, `Alph` or `fnsymbol`.
pub fn format_numeral(n: i64, style: &str) -> StateResult<String> {
    match COMMANDS.get(style) {
        Some(Command::Format(numeral, true)) => Ok(numeral.format(n)?.to_uppercase()),
        Some(Command::Format(numeral, false)) => Ok(numeral.format(n)?.to_lowercase()),
        _ => Err(StateError::UnknownCommand(style.to_string())),
    }
}

/// Split separated text into items, see [`lists::separate`]
pub fn separate_list(input: &str, separator: &str) -> StateResult<Vec<String>> {
    lists::separate(input, separator)
}

/// Names of all built-in commands, sorted
pub fn supported_commands() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = COMMANDS.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_integer_rounds() {
        assert_eq!(evaluate_integer("7/2").unwrap(), 4);
        assert_eq!(evaluate_integer("-7/2").unwrap(), -4);
        assert_eq!(evaluate_integer("1/3").unwrap(), 0);
    }

    #[test]
    fn test_evaluate_integer_division_by_zero() {
        assert_eq!(evaluate_integer("1/0").unwrap_err().kind(), "InvalidNumber");
    }

    #[test]
    fn test_format_numeral() {
        assert_eq!(format_numeral(1994, "Roman").unwrap(), "MCMXCIV");
        assert_eq!(format_numeral(1994, "roman").unwrap(), "mcmxciv");
        assert_eq!(format_numeral(3, "alph").unwrap(), "c");
        assert_eq!(format_numeral(3, "fnsymbol").unwrap(), "\u{2021}");
        assert_eq!(format_numeral(3, "value").unwrap_err().kind(), "UnknownCommand");
        assert_eq!(format_numeral(3, "nope").unwrap_err().kind(), "UnknownCommand");
    }

    #[test]
    fn test_format_numeral_huge_roman() {
        assert_eq!(
            format_numeral(i64::MAX, "Roman").unwrap_err().kind(),
            "InvalidNumber"
        );
        assert_eq!(format_numeral(i64::MAX, "arabic").unwrap(), i64::MAX.to_string());
    }

    #[test]
    fn test_separate_list() {
        assert_eq!(separate_list("x;y", ";").unwrap(), vec!["x", "y"]);
    }

    #[test]
    fn test_supported_commands() {
        let names = supported_commands();
        assert!(names.contains(&"stepcounter"));
        assert!(names.contains(&"DeclareListParser"));
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }
}
