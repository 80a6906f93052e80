//! Session state
//!
//! A [`Session`] owns every store the commands operate on. Hosts keep one
//! session per document, or call [`Session::reset`] between documents.

use indexmap::IndexMap;
use tracing::debug;

use super::counters::CounterRegistry;
use super::flags::FlagStore;
use super::lists::ListStore;
use super::numexpr::{numexpr, DivisionMode};
use crate::features::dispatch;
use crate::features::macros::{ArgumentScanner, ArgumentSource};
use crate::features::Expansion;
use crate::utils::error::StateResult;
use crate::utils::names::{control_sequence_name, strip_control_sequence};

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Check names given to defining commands against the control sequence
    /// name rules
    pub validate_names: bool,
    /// Integer conversion used by arithmetic commands
    pub division: DivisionMode,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            validate_names: true,
            division: DivisionMode::Rounded,
        }
    }
}

impl SessionOptions {
    /// Behave like LaTeX with etoolbox loaded
    pub fn latex() -> Self {
        Self::default()
    }

    /// Accept any name, e.g. `sec2` or names with spaces
    pub fn lenient() -> Self {
        Self {
            validate_names: false,
            ..Self::default()
        }
    }
}

/// How a declared list parser hands items on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLoop {
    /// `\do{item}` for every item
    Do,
    /// Read a handler argument first and call it for every item
    Handler,
}

/// A list parser declared with `\DeclareListParser`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParser {
    pub separator: String,
    pub mode: ListLoop,
}

/// All counter, flag and list state of one document
#[derive(Debug, Default)]
pub struct Session {
    counters: CounterRegistry,
    flags: FlagStore,
    lists: ListStore,
    list_parsers: IndexMap<String, ListParser>,
    options: SessionOptions,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn counters(&self) -> &CounterRegistry {
        &self.counters
    }

    pub fn counters_mut(&mut self) -> &mut CounterRegistry {
        &mut self.counters
    }

    pub fn flags(&self) -> &FlagStore {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut FlagStore {
        &mut self.flags
    }

    pub fn lists(&self) -> &ListStore {
        &self.lists
    }

    pub fn lists_mut(&mut self) -> &mut ListStore {
        &mut self.lists
    }

    /// Clear all stores and declared list parsers; options are kept
    pub fn reset(&mut self) {
        debug!(
            counters = self.counters.len(),
            flags = self.flags.len(),
            lists = self.lists.len(),
            "session reset"
        );
        self.counters.reset();
        self.flags.reset();
        self.lists.reset();
        self.list_parsers.clear();
    }

    /// Evaluate an expression with the session's division mode
    pub fn numexpr(&self, text: &str) -> StateResult<i64> {
        numexpr(text, self.options.division)
    }

    /// Normalize a name argument, validating it unless the session is lenient
    pub fn name(&self, raw: &str, command: &str, require_backslash: bool) -> StateResult<String> {
        if self.options.validate_names {
            control_sequence_name(raw, command, require_backslash)
        } else {
            strip_control_sequence(raw, command, require_backslash).map(str::to_string)
        }
    }

    /// Register a list parser; redeclaring a name replaces it
    pub fn declare_list_parser(&mut self, name: &str, separator: &str, mode: ListLoop) {
        debug!(parser = name, separator, ?mode, "declared list parser");
        self.list_parsers.insert(
            name.to_string(),
            ListParser {
                separator: separator.to_string(),
                mode,
            },
        );
    }

    pub fn list_parser(&self, name: &str) -> Option<&ListParser> {
        self.list_parsers.get(name)
    }

    /// Run the command `name` (without backslash), reading its arguments
    /// from `args`
    pub fn execute(
        &mut self,
        name: &str,
        args: &mut dyn ArgumentSource,
    ) -> StateResult<Expansion> {
        dispatch::execute(self, name, args)
    }

    /// Run the command `name` with arguments written as LaTeX source
    ///
    /// ```
    /// use texstate::session::Session;
    /// use texstate::features::Expansion;
    ///
    /// let mut session = Session::new();
    /// session.invoke("newcounter", "{section}").unwrap();
    /// session.invoke("setcounter", "{section}{3}").unwrap();
    /// assert_eq!(
    ///     session.invoke("Roman", "{section}").unwrap(),
    ///     Expansion::Text("III".to_string())
    /// );
    /// ```
    pub fn invoke(&mut self, name: &str, args: &str) -> StateResult<Expansion> {
        let mut scanner = ArgumentScanner::new(args);
        self.execute(name, &mut scanner)
    }
}
