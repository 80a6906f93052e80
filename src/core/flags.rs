//! etoolbox boolean flags
//!
//! `\newbool` and `\newtoggle` define flags in two separate namespaces, so a
//! bool and a toggle may share a name without affecting each other.

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::utils::error::{StateError, StateResult};

/// Flag namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// `\newbool` and friends
    Bool,
    /// `\newtoggle` and friends
    Toggle,
}

impl FlagKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlagKind::Bool => "bool",
            FlagKind::Toggle => "toggle",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse the value argument of `\setbool` / `\settoggle`
pub fn parse_flag_value(text: &str) -> StateResult<bool> {
    match text {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(StateError::InvalidFlagValue(other.to_string())),
    }
}

/// Store of all flags of a session
#[derive(Debug, Default)]
pub struct FlagStore {
    flags: IndexMap<(FlagKind, String), bool>,
}

impl FlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a flag with the value `false`.
    ///
    /// Redefinition is silently ignored unless `error_if_defined` is set, in
    /// which case it fails with [`StateError::DuplicateFlag`].
    pub fn create(&mut self, kind: FlagKind, name: &str, error_if_defined: bool) -> StateResult<()> {
        let key = (kind, name.to_string());
        if self.flags.contains_key(&key) {
            if error_if_defined {
                return Err(StateError::DuplicateFlag {
                    kind: kind.to_string(),
                    name: name.to_string(),
                });
            }
            return Ok(());
        }

        debug!(%kind, flag = name, "created flag");
        self.flags.insert(key, false);
        Ok(())
    }

    pub fn get(&self, kind: FlagKind, name: &str) -> StateResult<bool> {
        self.flags
            .get(&(kind, name.to_string()))
            .copied()
            .ok_or_else(|| undefined(kind, name))
    }

    pub fn set(&mut self, kind: FlagKind, name: &str, value: bool) -> StateResult<()> {
        let slot = self
            .flags
            .get_mut(&(kind, name.to_string()))
            .ok_or_else(|| undefined(kind, name))?;
        *slot = value;
        Ok(())
    }

    pub fn contains(&self, kind: FlagKind, name: &str) -> bool {
        self.flags.contains_key(&(kind, name.to_string()))
    }

    /// Defined flags of one namespace, in definition order
    pub fn names(&self, kind: FlagKind) -> impl Iterator<Item = &str> {
        self.flags
            .keys()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, name)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Remove every flag
    pub fn reset(&mut self) {
        self.flags.clear();
    }
}

fn undefined(kind: FlagKind, name: &str) -> StateError {
    StateError::UndefinedFlag {
        kind: kind.to_string(),
        name: name.to_string(),
    }
}
