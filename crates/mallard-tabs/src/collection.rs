//! Tab Collection
//!
//! Ordered tabs plus the index of the current one. Indices are positional:
//! removing a tab shifts everything to its right one slot to the left.

use crate::error::TabError;
use crate::tab::{Link, Tab};
use crate::Result;

/// What the shell should select after a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reselection {
    /// The collection is empty; a default Home tab must be attached first.
    NeedsDefaultTab,
    /// Select this index.
    Select(usize),
}

#[derive(Debug, Default)]
pub struct TabCollection {
    tabs: Vec<Tab>,
    current: Option<usize>,
}

impl TabCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab and return its index. The selection is untouched.
    pub fn add(&mut self, tab: Tab) -> usize {
        self.tabs.push(tab);
        let index = self.tabs.len() - 1;
        tracing::debug!(tab_index = index, count = self.tabs.len(), "Added tab");
        index
    }

    /// Make the tab at `index` current.
    pub fn select(&mut self, index: usize) -> Result<&mut Tab> {
        self.check_index(index)?;
        self.current = Some(index);
        tracing::debug!(tab_index = index, "Selected tab");
        Ok(&mut self.tabs[index])
    }

    /// Remove and return the tab at `index` without choosing a new selection.
    ///
    /// The selection keeps its numeric value while it is still in range. One
    /// that would point past the end is unset, leaving a non-empty collection
    /// with no current tab until the caller selects one.
    pub fn remove(&mut self, index: usize) -> Result<Tab> {
        self.check_index(index)?;
        let tab = self.tabs.remove(index);

        if matches!(self.current, Some(current) if current >= self.tabs.len()) {
            self.current = None;
        }

        tracing::debug!(tab_index = index, count = self.tabs.len(), "Removed tab");
        Ok(tab)
    }

    /// Drop every tab. The caller must attach a default tab afterwards.
    pub fn clear_all(&mut self) {
        let count = self.tabs.len();
        self.tabs.clear();
        self.current = None;
        tracing::info!(count, "Cleared all tabs");
    }

    /// Highest valid index, or `None` when empty.
    pub fn last_valid_index(&self) -> Option<usize> {
        self.tabs.len().checked_sub(1)
    }

    /// Selection to apply after the tab at `removed` was taken out: the tab
    /// that shifted into its slot, or the new last tab if it was the last one.
    pub fn reselection_after_remove(&self, removed: usize) -> Reselection {
        match self.last_valid_index() {
            None => Reselection::NeedsDefaultTab,
            Some(last) if removed > last => Reselection::Select(last),
            Some(_) => Reselection::Select(removed),
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&Tab> {
        self.current.and_then(|index| self.tabs.get(index))
    }

    pub fn current_mut(&mut self) -> Option<&mut Tab> {
        match self.current {
            Some(index) => self.tabs.get_mut(index),
            None => None,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    /// Tab switcher details, one per tab in order. Home tabs have no URL and
    /// are skipped.
    pub fn links(&self) -> Vec<Link> {
        self.tabs.iter().filter_map(Tab::link).collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tabs.len() {
            Ok(())
        } else {
            Err(TabError::IndexOutOfRange {
                index,
                len: self.tabs.len(),
            })
        }
    }
}
