use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use shredlink_api::ApiClient;
use shredlink_core::{Text, UnlockError, UnlockFlow, UnlockState};

use crate::components::{Alert, AlertVariant, Button, Header, Spinner};
use crate::services::{clipboard, config};
use crate::state::prefs::use_prefs;

/// Unlock page: password prompt for a protected link, replaced wholesale by
/// the revealed secret after a successful attempt.
#[component]
pub fn UnlockPage() -> impl IntoView {
    let prefs = use_prefs();

    // The token is fixed for the life of the page view.
    let query = use_query_map();
    let token = StoredValue::new(query.read_untracked().get("token").unwrap_or_default());

    let (password, set_password) = signal(String::new());
    let flow = RwSignal::new(UnlockFlow::new());
    let copied = RwSignal::new(false);
    let copy_generation = RwSignal::new(0u64);

    let error_message = move || {
        let current = flow.get();
        match current.state() {
            UnlockState::Locked { error: Some(error) } => Some(error.message(prefs.lang())),
            _ => None,
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut current = flow.get_untracked();
        let Some(generation) = current.begin() else {
            return;
        };
        flow.set(current);

        let token = token.get_value();
        let password = password.get_untracked();
        spawn_local(async move {
            let client = ApiClient::new(&config::api_base());
            let outcome = client.unlock(&token, &password).await;

            let mut resolved = flow.get_untracked();
            let changed = match outcome {
                Ok(response) => resolved.succeed(generation, response.text),
                Err(error) => resolved.fail(generation, UnlockError::from_api(&error)),
            };
            if changed {
                flow.set(resolved);
            }
        });
    };

    let on_copy = Callback::new(move |_| {
        let current = flow.get_untracked();
        if let Some(text) = current.revealed() {
            clipboard::copy_with_feedback(text.to_string(), copied, copy_generation);
        }
    });

    view! {
        <div class="max-w-2xl mx-auto px-4 py-8">
            {move || {
                let current = flow.get();
                match current.state() {
                    UnlockState::Unlocked { text } => {
                        let text = text.clone();
                        view! {
                            <Header back_link=true/>
                            <div class="bg-white dark:bg-slate-800 rounded-2xl shadow-sm border border-slate-200 dark:border-slate-700 overflow-hidden">
                                <div class="p-6 sm:p-8">
                                    // Rendered as a single text node; markup in the
                                    // secret stays literal.
                                    <pre
                                        dir="auto"
                                        style="unicode-bidi:plaintext;text-align:start"
                                        class="whitespace-pre-wrap break-words text-sm leading-relaxed text-slate-900 dark:text-slate-100 max-h-[70vh] overflow-y-auto"
                                    >
                                        {text}
                                    </pre>
                                </div>
                                <div class="px-6 sm:px-8 py-4 border-t border-slate-200 dark:border-slate-700 flex flex-wrap items-center gap-3">
                                    <Button on_click=on_copy>
                                        {move || {
                                            if copied.get() {
                                                prefs.t(Text::Copied)
                                            } else {
                                                prefs.t(Text::CopyAll)
                                            }
                                        }}
                                    </Button>
                                    <span class="text-xs text-slate-500 dark:text-slate-400">
                                        {move || prefs.t(Text::CopyManual)}
                                    </span>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    _ => {
                        view! {
                            <Header/>
                            <form
                                class="bg-white dark:bg-slate-800 rounded-2xl shadow-sm border border-slate-200 dark:border-slate-700 p-6 sm:p-8 space-y-5"
                                on:submit=on_submit
                            >
                                <div>
                                    <h1 class="text-lg font-semibold text-slate-800 dark:text-slate-100">
                                        {move || prefs.t(Text::UnlockTitle)}
                                    </h1>
                                    <p class="mt-1 text-sm text-slate-500 dark:text-slate-400">
                                        {move || prefs.t(Text::UnlockDesc)}
                                    </p>
                                </div>

                                <Show when=move || error_message().is_some()>
                                    <Alert variant=AlertVariant::Error>
                                        {move || error_message().unwrap_or_default()}
                                    </Alert>
                                </Show>

                                <input
                                    type="password"
                                    autocomplete="current-password"
                                    class="w-full rounded-xl border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 text-slate-900 dark:text-slate-100 px-3.5 py-2.5 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                    placeholder=move || prefs.t(Text::PasswordPlaceholder)
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                />

                                <button
                                    type="submit"
                                    class="w-full inline-flex items-center justify-center gap-2 px-4 py-2.5 rounded-xl font-medium text-sm bg-indigo-600 hover:bg-indigo-700 dark:bg-indigo-500 dark:hover:bg-indigo-600 text-white transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                                    disabled=move || flow.get().is_verifying()
                                >
                                    <Show when=move || flow.get().is_verifying()>
                                        <Spinner/>
                                    </Show>
                                    {move || prefs.t(Text::UnlockBtn)}
                                </button>
                            </form>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
