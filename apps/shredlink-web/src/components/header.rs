use leptos::prelude::*;
use shredlink_core::{Lang, Text};

use crate::state::prefs::use_prefs;

/// Page header: brand (or back-home) link, dark-mode toggle, EN/FA switcher.
///
/// The toggles talk straight to the preferences context, so the header works
/// identically wherever it is mounted, including surfaces created after the
/// initial page load.
#[component]
pub fn Header(#[prop(optional)] back_link: bool) -> impl IntoView {
    let prefs = use_prefs();

    let lang_button = |lang: Lang, label: &'static str| {
        view! {
            <button
                type="button"
                class="min-h-[44px] min-w-[52px] px-4 py-2.5 text-sm transition-colors text-slate-500 dark:text-slate-400 hover:bg-slate-200/70 dark:hover:bg-slate-600/50"
                class=("font-medium", move || prefs.lang() == lang)
                class=("bg-white", move || prefs.lang() == lang)
                class=("dark:bg-slate-600", move || prefs.lang() == lang)
                on:click=move |_| prefs.set_lang(lang)
            >
                {label}
            </button>
        }
    };

    view! {
        <header class="flex items-center justify-between mb-6">
            {if back_link {
                view! {
                    <a href="/" class="text-indigo-600 dark:text-indigo-400 hover:underline font-medium">
                        {move || prefs.t(Text::BackHome)}
                    </a>
                }
                    .into_any()
            } else {
                view! {
                    <a href="/" class="text-xl font-semibold text-slate-800 dark:text-slate-100">
                        {move || prefs.t(Text::Title)}
                    </a>
                }
                    .into_any()
            }}
            <div class="flex items-center gap-3">
                <button
                    type="button"
                    aria-label="Dark mode"
                    class="p-2 rounded-lg text-slate-600 dark:text-slate-400 hover:bg-slate-200 dark:hover:bg-slate-700"
                    on:click=move |_| prefs.toggle_dark()
                >
                    {move || if prefs.dark() { "☀" } else { "☾" }}
                </button>
                <div class="inline-flex rounded-xl border border-slate-200 dark:border-slate-600 overflow-hidden bg-slate-100/80 dark:bg-slate-700/50">
                    {lang_button(Lang::En, "EN")}
                    {lang_button(Lang::Fa, "فا")}
                </div>
            </div>
        </header>
    }
}
