//! Data layer - Static tables
//!
//! This module contains the static data behind the command layer:
//! - Numeral tables and formatting functions
//! - The counter/etoolbox command table

pub mod commands;
pub mod numerals;

// Re-export commonly used items
pub use commands::{lookup_command, Command, Parity, Relation, COMMANDS};
pub use numerals::{
    to_alph, to_arabic, to_fn_symbol, to_roman, NumeralStyle, FN_SYMBOLS, ROMAN_NUMERALS,
};
