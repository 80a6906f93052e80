//! Feature modules - Command layer
//!
//! This module contains the commands hosts invoke on a session:
//! - Argument reading (`ArgumentSource`)
//! - Counter package commands
//! - etoolbox commands
//! - Dispatch by control sequence name

pub mod counters;
pub mod dispatch;
pub mod etoolbox;
pub mod expansion;
pub mod macros;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use expansion::Expansion;
pub use macros::{parse_int, ArgumentScanner, ArgumentSource};
