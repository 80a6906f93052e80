//! Counter arena and reset hierarchy

use fxhash::FxHashMap;
use tracing::debug;

use crate::utils::error::{StateError, StateResult};

/// Stable index of a counter inside its registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterId(usize);

/// How `\the<counter>` renders a counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The decimal value
    Plain,
    /// The rendering of another counter, a dot, then the value
    PrefixedBy(CounterId),
}

/// A named counter
#[derive(Debug, Clone)]
pub struct Counter {
    name: String,
    value: i64,
    /// The counter whose `\stepcounter` resets this one
    parent: Option<CounterId>,
    /// Counters reset by this one, in attachment order
    children: Vec<CounterId>,
    render: RenderMode,
}

impl Counter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn parent(&self) -> Option<CounterId> {
        self.parent
    }

    pub fn children(&self) -> &[CounterId] {
        &self.children
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render
    }
}

/// Registry of all counters of a session
///
/// Counters are stored in an arena and refer to each other by [`CounterId`],
/// so reparenting only rewrites indices. Counters are never removed except by
/// [`CounterRegistry::reset`], which keeps ids stable for the session.
#[derive(Debug, Default)]
pub struct CounterRegistry {
    counters: Vec<Counter>,
    by_name: FxHashMap<String, CounterId>,
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of defined counters
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Remove every counter
    pub fn reset(&mut self) {
        self.counters.clear();
        self.by_name.clear();
    }

    /// Define a new counter.
    ///
    /// With `reset_by`, the new counter is reset whenever that counter is
    /// stepped. Nothing is registered if either check fails.
    pub fn create(
        &mut self,
        name: &str,
        reset_by: Option<&str>,
        initial: i64,
    ) -> StateResult<CounterId> {
        if self.by_name.contains_key(name) {
            return Err(StateError::DuplicateCounter(name.to_string()));
        }
        let parent = reset_by.map(|p| self.id(p)).transpose()?;

        let id = CounterId(self.counters.len());
        self.counters.push(Counter {
            name: name.to_string(),
            value: initial,
            parent,
            children: Vec::new(),
            render: RenderMode::Plain,
        });
        self.by_name.insert(name.to_string(), id);
        if let Some(parent) = parent {
            self.counters[parent.0].children.push(id);
        }

        debug!(counter = name, reset_by = ?reset_by, initial, "created counter");
        Ok(id)
    }

    /// Resolve a counter name
    pub fn id(&self, name: &str) -> StateResult<CounterId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| StateError::undefined_counter(name))
    }

    /// Look up a counter by name
    pub fn get(&self, name: &str) -> StateResult<&Counter> {
        self.id(name).map(|id| &self.counters[id.0])
    }

    /// Look up a counter without failing
    pub fn try_get(&self, name: &str) -> Option<&Counter> {
        self.by_name.get(name).map(|id| &self.counters[id.0])
    }

    /// Whether a counter is defined
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Access a counter by id
    pub fn counter(&self, id: CounterId) -> &Counter {
        &self.counters[id.0]
    }

    /// Current value of a counter
    pub fn value(&self, name: &str) -> StateResult<i64> {
        self.get(name).map(Counter::value)
    }

    /// Overwrite the value, without resetting subcounters
    pub fn set_value(&mut self, name: &str, value: i64) -> StateResult<()> {
        let id = self.id(name)?;
        self.counters[id.0].value = value;
        Ok(())
    }

    /// Add to the value, without resetting subcounters
    pub fn add_to(&mut self, name: &str, delta: i64) -> StateResult<()> {
        let id = self.id(name)?;
        let counter = &mut self.counters[id.0];
        counter.value = counter.value.saturating_add(delta);
        Ok(())
    }

    /// Increment a counter and reset its whole subtree to zero
    pub fn step(&mut self, name: &str) -> StateResult<()> {
        let id = self.id(name)?;
        self.step_id(id);
        Ok(())
    }

    fn step_id(&mut self, id: CounterId) {
        let counter = &mut self.counters[id.0];
        counter.value = counter.value.saturating_add(1);

        // Each child is stepped from -1 so that it lands on 0 and resets its
        // own children in turn.
        let children = counter.children.clone();
        for child in children {
            if self.counters[child.0].value != 0 {
                debug!(counter = %self.counters[child.0].name, "reset by step");
            }
            self.counters[child.0].value = -1;
            self.step_id(child);
        }
    }

    /// Make `within` reset `name`, detaching it from any previous parent.
    ///
    /// With `update_render`, `\the<name>` becomes `\the<within>.<value>`;
    /// otherwise the render mode is left as it was. An assignment that would
    /// make a counter its own ancestor, or its own render prefix, fails with
    /// [`StateError::CounterCycle`].
    pub fn within(&mut self, name: &str, within: &str, update_render: bool) -> StateResult<()> {
        let id = self.id(name)?;
        let parent = self.id(within)?;
        if self.is_ancestor_or_self(id, parent)
            || (update_render && self.is_render_prefix_or_self(id, parent))
        {
            return Err(StateError::CounterCycle {
                counter: name.to_string(),
                within: within.to_string(),
            });
        }

        self.detach(id);
        self.counters[parent.0].children.push(id);
        let counter = &mut self.counters[id.0];
        counter.parent = Some(parent);
        if update_render {
            counter.render = RenderMode::PrefixedBy(parent);
        }

        debug!(counter = name, within, update_render, "counter within");
        Ok(())
    }

    /// Undo [`CounterRegistry::within`] if `within` is the current parent
    pub fn without(&mut self, name: &str, within: &str) -> StateResult<()> {
        let id = self.id(name)?;
        let parent = self.id(within)?;
        if self.counters[id.0].parent != Some(parent) {
            return Ok(());
        }

        self.detach(id);
        let counter = &mut self.counters[id.0];
        counter.parent = None;
        counter.render = RenderMode::Plain;

        debug!(counter = name, within, "counter without");
        Ok(())
    }

    /// Render a counter the way `\the<name>` does
    pub fn render(&self, name: &str) -> StateResult<String> {
        Ok(self.render_id(self.id(name)?))
    }

    fn render_id(&self, id: CounterId) -> String {
        let counter = &self.counters[id.0];
        match counter.render {
            RenderMode::Plain => counter.value.to_string(),
            RenderMode::PrefixedBy(prefix) => {
                format!("{}.{}", self.render_id(prefix), counter.value)
            }
        }
    }

    /// Names of all counters in definition order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.counters.iter().map(|c| c.name.as_str())
    }

    fn detach(&mut self, id: CounterId) {
        if let Some(parent) = self.counters[id.0].parent {
            let siblings = &mut self.counters[parent.0].children;
            if let Some(pos) = siblings.iter().position(|&c| c == id) {
                siblings.remove(pos);
            }
        }
    }

    /// Whether `id` is `candidate` or one of its ancestors
    fn is_ancestor_or_self(&self, id: CounterId, candidate: CounterId) -> bool {
        let mut current = Some(candidate);
        while let Some(c) = current {
            if c == id {
                return true;
            }
            current = self.counters[c.0].parent;
        }
        false
    }

    /// Whether rendering `candidate` would render `id`
    fn is_render_prefix_or_self(&self, id: CounterId, candidate: CounterId) -> bool {
        let mut current = candidate;
        loop {
            if current == id {
                return true;
            }
            match self.counters[current.0].render {
                RenderMode::PrefixedBy(prefix) => current = prefix,
                RenderMode::Plain => return false,
            }
        }
    }
}
