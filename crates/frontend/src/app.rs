use crate::domain::a001_model_response::ui::AIResponsesDisplay;
use crate::shared::config::{read_embedded_responses, DisplayConfig};
use contracts::domain::a001_model_response::ResponseSet;
use leptos::prelude::*;
use std::cell::Cell;
use thaw::ConfigProvider;

thread_local! {
    static RESPONSES: Cell<Option<RwSignal<ResponseSet>>> = const { Cell::new(None) };
}

/// Push a new set into the mounted app. Returns `false` before `App` runs.
pub fn set_responses(responses: ResponseSet) -> bool {
    match RESPONSES.with(Cell::get) {
        Some(signal) => {
            log::debug!("Received {} model responses from host", responses.len());
            signal.set(responses);
            true
        }
        None => false,
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = DisplayConfig::from_location();

    let initial = match read_embedded_responses(&config.data) {
        Ok(set) => set,
        Err(e) => {
            log::warn!("Ignoring embedded responses: {}", e);
            ResponseSet::new()
        }
    };
    let responses = RwSignal::new(initial);
    RESPONSES.with(|cell| cell.set(Some(responses)));

    view! {
        <ConfigProvider>
            <AIResponsesDisplay responses=responses compare=config.compare />
        </ConfigProvider>
    }
}
