use super::copy_button::CopyButton;
use super::selection::SharedSelection;
use super::view_model::ResponsesDisplayVm;
use crate::shared::icons::icon;
use contracts::domain::a001_model_response::AccordionEntry;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AccordionItem(
    entry: AccordionEntry,
    controller: SharedSelection,
    vm: ResponsesDisplayVm,
) -> impl IntoView {
    let key = entry.key;
    let is_open = {
        let controller = controller.clone();
        Signal::derive(move || controller.current_selection() == Some(key))
    };

    let handle_toggle = move |_| controller.select(key);

    let label = entry.label;
    let body = entry.body;
    let copy_key = format!("copy-{}", key);

    view! {
        <div
            class="ai-responses__item"
            data-key=key.to_string()
            style="border-bottom: 1px solid var(--colorNeutralStroke2);"
        >
            <button
                type="button"
                class="ai-responses__trigger"
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
                on:click=handle_toggle
                style="width: 100%; display: flex; justify-content: space-between; align-items: center; padding: 12px 0; background: none; border: none; cursor: pointer; color: inherit; font-size: 18px; font-weight: 600; text-align: left;"
            >
                <span>{label}</span>
                {move || if is_open.get() { icon("chevron-down") } else { icon("chevron-right") }}
            </button>
            {move || {
                is_open.get().then(|| {
                    view! {
                        <div class="ai-responses__content" role="region" style="padding-bottom: 12px;">
                            <p style="margin-top: 8px; white-space: pre-wrap;">{body.clone()}</p>
                            <CopyButton copy_key=copy_key.clone() text=body.clone() vm=vm />
                        </div>
                    }
                })
            }}
        </div>
    }
}
