//! Hierarchical LaTeX counters
//!
//! A counter may be reset by at most one other counter (its parent). The reset
//! hierarchy can be rewired at any time with `\counterwithin` and
//! `\counterwithout`:
//!
//! ```text
//! chapter ──► section ──► subsection
//!    \stepcounter{chapter} resets section and subsection to 0
//! ```
//!
//! Only [`CounterRegistry::step`] cascades; `\setcounter` and `\addtocounter`
//! change the value alone, as in LaTeX.
//!
//! # Example
//!
//! ```rust
//! use texstate::counters::CounterRegistry;
//!
//! let mut counters = CounterRegistry::new();
//! counters.create("chapter", None, 0).unwrap();
//! counters.create("section", Some("chapter"), 0).unwrap();
//! counters.within("section", "chapter", true).unwrap();
//!
//! counters.step("chapter").unwrap();
//! counters.step("section").unwrap();
//! assert_eq!(counters.render("section").unwrap(), "1.1");
//! ```

mod registry;


// Re-export public API
pub use registry::{Counter, CounterId, CounterRegistry, RenderMode};
