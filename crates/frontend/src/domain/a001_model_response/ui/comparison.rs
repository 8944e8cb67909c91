use super::copy_button::CopyButton;
use super::view_model::ResponsesDisplayVm;
use contracts::domain::a001_model_response::ResponseSet;
use leptos::prelude::*;

/// One column per model, headers upper-cased.
#[component]
#[allow(non_snake_case)]
pub fn ComparisonView(responses: Signal<ResponseSet>, vm: ResponsesDisplayVm) -> impl IntoView {
    let grid_style = move || {
        let columns = responses.with(|set| set.len()).max(1);
        format!(
            "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); gap: 16px;",
            columns
        )
    };

    view! {
        <div class="ai-responses__columns" style=grid_style>
            {move || {
                responses
                    .with(|set| set.entries())
                    .into_iter()
                    .map(|entry| {
                        let copy_key = format!("compare-{}", entry.key);
                        let title = entry.label.to_uppercase();
                        let body = entry.body;
                        let text = body.clone();
                        view! {
                            <div class="ai-responses__column" data-key=entry.key.to_string()>
                                <div style="color: #1aa3ff; font-weight: bold; font-size: 20px;">
                                    {title}
                                </div>
                                <p style="margin-top: 8px; white-space: pre-wrap;">{body}</p>
                                <CopyButton copy_key=copy_key text=text vm=vm />
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
