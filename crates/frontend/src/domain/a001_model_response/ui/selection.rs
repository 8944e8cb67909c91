//! Which accordion entry is open.
//!
//! At most one entry is open. Selecting another entry replaces the open one,
//! selecting the open entry closes it.

use leptos::prelude::*;
use std::sync::{Arc, Mutex};

pub trait SelectionController: Send + Sync {
    fn select(&self, key: usize);
    fn current_selection(&self) -> Option<usize>;
}

/// Controller handed to the display component.
///
/// The component re-renders only when `current_selection` reads reactive
/// state, so implementations used for live UI should be signal-backed.
pub type SharedSelection = Arc<dyn SelectionController>;

/// Single-select collapsible transition.
pub fn next_selection(current: Option<usize>, key: usize) -> Option<usize> {
    if current == Some(key) {
        None
    } else {
        Some(key)
    }
}

/// Reactive controller used by the component unless one is injected.
#[derive(Clone, Copy)]
pub struct SignalSelection {
    selected: RwSignal<Option<usize>>,
}

impl SignalSelection {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(None),
        }
    }
}

impl Default for SignalSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController for SignalSelection {
    fn select(&self, key: usize) {
        let current = self.selected.get_untracked();
        let next = next_selection(current, key);
        log::debug!("Accordion selection {:?} -> {:?}", current, next);
        self.selected.set(next);
    }

    fn current_selection(&self) -> Option<usize> {
        self.selected.get()
    }
}

/// Plain controller without a reactive runtime.
#[derive(Default)]
pub struct LocalSelection {
    selected: Mutex<Option<usize>>,
}

impl LocalSelection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionController for LocalSelection {
    fn select(&self, key: usize) {
        let mut selected = self.selected.lock().unwrap_or_else(|e| e.into_inner());
        *selected = next_selection(*selected, key);
    }

    fn current_selection(&self) -> Option<usize> {
        *self.selected.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_open_initially() {
        assert_eq!(LocalSelection::new().current_selection(), None);
    }

    #[test]
    fn test_next_selection() {
        assert_eq!(next_selection(None, 0), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(1));
        assert_eq!(next_selection(Some(1), 1), None);
    }

    #[test]
    fn test_selecting_another_entry_replaces_open_one() {
        let selection = LocalSelection::new();
        selection.select(0);
        selection.select(1);
        assert_eq!(selection.current_selection(), Some(1));
    }

    #[test]
    fn test_selecting_open_entry_collapses_it() {
        let selection = LocalSelection::new();
        selection.select(2);
        selection.select(2);
        assert_eq!(selection.current_selection(), None);

        selection.select(2);
        assert_eq!(selection.current_selection(), Some(2));
    }

    #[test]
    fn test_works_through_trait_object() {
        let selection: SharedSelection = Arc::new(LocalSelection::new());
        selection.select(3);
        let other = Arc::clone(&selection);
        other.select(4);
        assert_eq!(selection.current_selection(), Some(4));
    }
}
