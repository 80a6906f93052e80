//! etoolbox lists
//!
//! Lists are populated item by item (`\listadd`) or from separated text as
//! handled by list parsers declared with `\DeclareListParser`.

mod separator;
mod store;

// Re-export public API
pub use separator::separate;
pub use store::ListStore;
