//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use pkmn_filter::{Selection, SelectionChange};
use pkmn_stats::Dataset;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until loaded, or if loading failed)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current selection across all four charts
    pub selection: Signal<Selection>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selection: Signal::new(Selection::default()),
        }
    }

    /// Replace the selection with the result of one interaction.
    pub fn apply_change(&mut self, change: &SelectionChange) {
        let next = self.selection.peek().clone().apply(change);
        if next != *self.selection.peek() {
            self.selection.set(next);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
