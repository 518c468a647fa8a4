use leptos::prelude::*;
use shredlink_core::Text;

use crate::state::prefs::use_prefs;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let prefs = use_prefs();

    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <p class="text-9xl font-bold text-slate-300 dark:text-slate-700">"404"</p>
                <a
                    href="/"
                    class="mt-6 inline-block text-indigo-600 dark:text-indigo-400 hover:underline"
                >
                    {move || prefs.t(Text::BackHome)}
                </a>
            </div>
        </div>
    }
}
