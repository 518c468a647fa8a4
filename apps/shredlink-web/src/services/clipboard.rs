//! Clipboard service shared by every copy button.
//!
//! Tries the async Clipboard API first and falls back to a transient
//! off-screen textarea plus `execCommand("copy")` when the native path is
//! unavailable or rejects. The fallback itself can silently fail on exotic
//! engines; either way the caller's "Copied!" affordance is shown and
//! reverted after a fixed delay.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the "Copied!" label stays before reverting.
pub const COPY_FEEDBACK_MS: u64 = 2000;

/// Copy `text` and drive the confirmation affordance.
///
/// `copied` flips to `true` immediately after the copy attempt and back to
/// `false` after [`COPY_FEEDBACK_MS`]. Copying again before the revert
/// re-arms the label: each call bumps `copy_generation`, and a timer only
/// reverts if its generation is still current (last write wins).
pub fn copy_with_feedback(text: String, copied: RwSignal<bool>, copy_generation: RwSignal<u64>) {
    let generation = copy_generation.get_untracked() + 1;
    copy_generation.set(generation);

    spawn_local(async move {
        copy_text(&text).await;
        copied.set(true);
        set_timeout(
            move || {
                if copy_generation.get_untracked() == generation {
                    copied.set(false);
                }
            },
            Duration::from_millis(COPY_FEEDBACK_MS),
        );
    });
}

#[cfg(target_arch = "wasm32")]
pub async fn copy_text(text: &str) {
    use wasm_bindgen_futures::JsFuture;

    if let Some(window) = web_sys::window() {
        let clipboard = window.navigator().clipboard();
        if JsFuture::from(clipboard.write_text(text)).await.is_ok() {
            return;
        }
        web_sys::console::warn_1(&"clipboard write rejected, using fallback".into());
    }
    fallback_copy(text);
}

/// Legacy copy path: materialize the text in an off-screen textarea, select
/// it, and issue the copy command. The element never outlives this call.
#[cfg(target_arch = "wasm32")]
fn fallback_copy(text: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(element) = document.create_element("textarea") else {
        return;
    };
    let Ok(textarea) = element.dyn_into::<web_sys::HtmlTextAreaElement>() else {
        return;
    };

    textarea.set_value(text);
    let _ = textarea.style().set_property("position", "fixed");
    let _ = textarea.style().set_property("left", "-9999px");

    if body.append_child(&textarea).is_err() {
        return;
    }
    textarea.select();
    if let Some(html_document) = document.dyn_ref::<web_sys::HtmlDocument>() {
        let _ = html_document.exec_command("copy");
    }
    let _ = body.remove_child(&textarea);
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn copy_text(_text: &str) {}
