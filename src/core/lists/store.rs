//! Named ordered lists

use indexmap::IndexMap;
use tracing::debug;

use super::separator::separate;
use crate::utils::error::{StateError, StateResult};

/// Store of all lists of a session
///
/// Lists keep insertion order and duplicates. Empty items are never stored.
#[derive(Debug, Default)]
pub struct ListStore {
    lists: IndexMap<String, Vec<String>>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define an empty list.
    ///
    /// Redefinition is ignored unless `error_if_defined` is set.
    pub fn create(&mut self, name: &str, error_if_defined: bool) -> StateResult<()> {
        if self.lists.contains_key(name) {
            if error_if_defined {
                return Err(StateError::DuplicateList(name.to_string()));
            }
            return Ok(());
        }
        debug!(list = name, "created list");
        self.lists.insert(name.to_string(), Vec::new());
        Ok(())
    }

    pub fn get(&self, name: &str) -> StateResult<&[String]> {
        self.lists
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| StateError::undefined_list(name))
    }

    pub fn contains_list(&self, name: &str) -> bool {
        self.lists.contains_key(name)
    }

    /// Append an item; the empty string is ignored
    pub fn add(&mut self, name: &str, item: &str) -> StateResult<()> {
        let list = self.list_mut(name)?;
        if !item.is_empty() {
            list.push(item.to_string());
        }
        Ok(())
    }

    /// Append every item of a separated list, see [`separate`]
    pub fn extend_separated(&mut self, name: &str, text: &str, separator: &str) -> StateResult<()> {
        // Split before touching the list so a brace error leaves it unchanged
        let items = separate(text, separator)?;
        let list = self.list_mut(name)?;
        list.extend(items.into_iter().filter(|item| !item.is_empty()));
        Ok(())
    }

    /// Remove the first item equal to `item`, if any
    pub fn remove(&mut self, name: &str, item: &str) -> StateResult<()> {
        let list = self.list_mut(name)?;
        if let Some(pos) = list.iter().position(|i| i == item) {
            list.remove(pos);
        }
        Ok(())
    }

    /// Whether the list has an item equal to `item`
    pub fn contains(&self, name: &str, item: &str) -> StateResult<bool> {
        Ok(self.get(name)?.iter().any(|i| i == item))
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Remove every list
    pub fn reset(&mut self) {
        self.lists.clear();
    }

    fn list_mut(&mut self, name: &str) -> StateResult<&mut Vec<String>> {
        self.lists
            .get_mut(name)
            .ok_or_else(|| StateError::undefined_list(name))
    }
}
