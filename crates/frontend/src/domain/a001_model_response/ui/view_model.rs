//! AI Responses Display - View Model

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ResponsesDisplayVm {
    pub show_comparison: RwSignal<bool>,
    /// Copy button that most recently succeeded, cleared after a delay
    pub copied: RwSignal<Option<String>>,
}

impl ResponsesDisplayVm {
    pub fn new(compare: bool) -> Self {
        Self {
            show_comparison: RwSignal::new(compare),
            copied: RwSignal::new(None),
        }
    }
}
