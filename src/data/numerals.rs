//! Numeral formatting tables
//!
//! This module provides the lookup tables behind `\arabic`, `\roman`, `\alph`
//! and `\fnsymbol`, and the pure functions that apply them to counter values.

use crate::utils::error::{StateError, StateResult};

/// Roman numeral symbols, largest first, including the subtractive pairs
pub static ROMAN_NUMERALS: [(&str, i64); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Footnote symbols in `\fnsymbol` order
pub static FN_SYMBOLS: [&str; 9] = [
    "*",
    "\u{2020}", // dagger
    "\u{2021}", // double dagger
    "\u{00A7}", // section sign
    "\u{00B6}", // pilcrow
    "\u{2016}", // double vertical line
    "**",
    "\u{2020}\u{2020}",
    "\u{2021}\u{2021}",
];

/// Numeral style selected by the formatting commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralStyle {
    Arabic,
    Roman,
    Alph,
    FnSymbol,
}

impl NumeralStyle {
    /// Format `n` in this style
    ///
    /// Only Roman numerals can fail, see [`to_roman`].
    pub fn format(self, n: i64) -> StateResult<String> {
        Ok(match self {
            NumeralStyle::Arabic => to_arabic(n),
            NumeralStyle::Roman => to_roman(n)?,
            NumeralStyle::Alph => to_alph(n),
            NumeralStyle::FnSymbol => to_fn_symbol(n),
        })
    }
}

/// Decimal representation
pub fn to_arabic(n: i64) -> String {
    n.to_string()
}

/// Uppercase Roman numeral; empty for `n <= 0`
///
/// There is no fixed upper bound: values of 4000 and above repeat `M`.
/// Fails with `InvalidNumber` when the numeral cannot be allocated.
pub fn to_roman(n: i64) -> StateResult<String> {
    if n <= 0 {
        return Ok(String::new());
    }

    // At most 15 characters below 1000 (DCCCLXXXVIII)
    let too_large = || StateError::invalid_number(n.to_string());
    let len = usize::try_from(n / 1000)
        .ok()
        .and_then(|thousands| thousands.checked_add(15))
        .ok_or_else(too_large)?;
    let mut result = String::new();
    result.try_reserve(len).map_err(|_| too_large())?;

    let mut rest = n;
    for (symbol, value) in ROMAN_NUMERALS {
        while rest >= value {
            result.push_str(symbol);
            rest -= value;
        }
    }
    Ok(result)
}

/// Uppercase letter for `1..=26`, empty otherwise
pub fn to_alph(n: i64) -> String {
    if !(1..=26).contains(&n) {
        return String::new();
    }
    char::from(b'A' + (n - 1) as u8).to_string()
}

/// Footnote symbol for `1..=9`, empty otherwise
pub fn to_fn_symbol(n: i64) -> String {
    usize::try_from(n)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| FN_SYMBOLS.get(index))
        .map(|symbol| symbol.to_string())
        .unwrap_or_default()
}
