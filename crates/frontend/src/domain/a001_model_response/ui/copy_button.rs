use super::view_model::ResponsesDisplayVm;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

const NOTICE_MS: u32 = 2_000;

#[component]
#[allow(non_snake_case)]
pub fn CopyButton(
    /// Distinguishes this button's notice from the others
    copy_key: String,
    text: String,
    vm: ResponsesDisplayVm,
) -> impl IntoView {
    let on_click = move |_| {
        let copy_key = copy_key.clone();
        copy_to_clipboard_with_callback(&text, move || {
            vm.copied.set(Some(copy_key.clone()));
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(NOTICE_MS).await;
                // a later copy owns the notice now
                if vm.copied.get_untracked().as_deref() == Some(copy_key.as_str()) {
                    vm.copied.set(None);
                }
            });
        });
    };

    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Secondary
            on_click=on_click
        >
            {icon("copy")}
            " Copy"
        </Button>
    }
}
