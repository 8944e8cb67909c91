//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. Failures are logged and otherwise ignored.

use wasm_bindgen_futures::spawn_local;

/// Copy text to clipboard with a callback on success
///
/// Useful when you need to show a notification after copying.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            log::warn!("Clipboard unavailable: no window");
            return;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_success(),
            Err(e) => log::warn!("Failed to copy to clipboard: {:?}", e),
        }
    });
}
