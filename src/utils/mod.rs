//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Control sequence name validation

pub mod error;
pub mod names;

// Re-export commonly used items
pub use error::{StateError, StateResult};
pub use names::{control_sequence_name, is_valid_name, strip_control_sequence};
