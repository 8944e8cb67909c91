use super::accordion_item::AccordionItem;
use super::comparison::ComparisonView;
use super::selection::{SharedSelection, SignalSelection};
use super::view_model::ResponsesDisplayVm;
use contracts::domain::a001_model_response::ResponseSet;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

pub const HEADING: &str = "AI Model Responses";

/// Collapsible list of model responses, one entry per pair in order.
///
/// Selection is keyed by position and survives a new `responses` value.
#[component]
#[allow(non_snake_case)]
pub fn AIResponsesDisplay(
    #[prop(into)] responses: Signal<ResponseSet>,
    /// Defaults to a `SignalSelection`
    #[prop(optional)]
    controller: Option<SharedSelection>,
    /// Start with the side-by-side layout
    #[prop(optional)]
    compare: bool,
) -> impl IntoView {
    let vm = ResponsesDisplayVm::new(compare);
    let controller =
        controller.unwrap_or_else(|| Arc::new(SignalSelection::new()) as SharedSelection);

    view! {
        <div class="ai-responses" style="padding: 16px; background: var(--colorNeutralBackground1); border-radius: 8px; box-shadow: var(--shadow4);">
            <h2 style="font-size: 24px; font-weight: bold; margin-bottom: 16px;">{HEADING}</h2>

            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;">
                <Switch checked=vm.show_comparison label="Show side-by-side comparison"/>
                <Show when=move || vm.copied.get().is_some()>
                    <MessageBar intent=MessageBarIntent::Success>
                        <div>"Response copied to clipboard!"</div>
                    </MessageBar>
                </Show>
            </div>

            {move || {
                if vm.show_comparison.get() {
                    view! { <ComparisonView responses=responses vm=vm /> }.into_any()
                } else {
                    let controller = controller.clone();
                    view! {
                        <div class="ai-responses__list">
                            {move || {
                                responses
                                    .with(|set| set.entries())
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <AccordionItem
                                                entry=entry
                                                controller=controller.clone()
                                                vm=vm
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
