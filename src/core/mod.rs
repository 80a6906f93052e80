//! Core state modules
//!
//! This module contains the stores the commands manipulate:
//! - `counters`: hierarchical counters with cascading resets
//! - `flags`: etoolbox bools and toggles
//! - `lists`: etoolbox lists and the brace-aware separator
//! - `numexpr`: integer expression evaluation
//! - `session`: one instance of every store plus options

pub mod counters;
pub mod flags;
pub mod lists;
pub mod numexpr;
pub mod session;

// Re-export main types
pub use counters::{Counter, CounterId, CounterRegistry, RenderMode};
pub use flags::{FlagKind, FlagStore};
pub use lists::{separate, ListStore};
pub use numexpr::{evaluate, numexpr, DivisionMode};
pub use session::{ListLoop, ListParser, Session, SessionOptions};
