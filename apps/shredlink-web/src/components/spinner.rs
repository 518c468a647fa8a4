use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-block w-4 h-4 border-2 rounded-full animate-spin border-white/40 border-t-white {}",
            class,
        )></span>
    }
}
