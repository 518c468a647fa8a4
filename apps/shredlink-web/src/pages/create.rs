use leptos::prelude::*;
use leptos::task::spawn_local;
use shredlink_api::ApiClient;
use shredlink_core::create::{CreateForm, DEFAULT_EXPIRE, EXPIRE_OPTIONS};
use shredlink_core::{CreateError, CreateFlow, CreateState, Text};

use crate::components::{Alert, AlertVariant, Button, ButtonVariant, Header, Spinner};
use crate::services::{clipboard, config};
use crate::state::prefs::use_prefs;

/// Landing page: compose a secret, submit it, show the resulting link.
#[component]
pub fn CreatePage() -> impl IntoView {
    let prefs = use_prefs();

    let (text, set_text) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (expire, set_expire) = signal(DEFAULT_EXPIRE.to_string());
    let (one_time_view, set_one_time_view) = signal(false);
    let (one_time_password, set_one_time_password) = signal(false);

    let flow = RwSignal::new(CreateFlow::new());
    let copied = RwSignal::new(false);
    let copy_generation = RwSignal::new(0u64);

    let error_message = move || {
        let current = flow.get();
        match current.state() {
            CreateState::Composing { error: Some(error) } => Some(error.message(prefs.lang())),
            _ => None,
        }
    };

    let result_url = move || {
        let current = flow.get();
        match current.state() {
            CreateState::ResultShown { url } => Some(url.clone()),
            _ => None,
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut current = flow.get_untracked();
        let Some(generation) = current.begin() else {
            return;
        };

        let form = CreateForm {
            text: text.get_untracked(),
            password: password.get_untracked(),
            expire: expire.get_untracked(),
            one_time_view: one_time_view.get_untracked(),
            one_time_password: one_time_password.get_untracked(),
        };

        match form.normalize() {
            Err(error) => {
                // Validation failed locally; no request goes out.
                current.fail(generation, error);
                flow.set(current);
            }
            Ok(request) => {
                flow.set(current);
                spawn_local(async move {
                    let client = ApiClient::new(&config::api_base());
                    let outcome = client.create(&request).await;

                    let mut resolved = flow.get_untracked();
                    let changed = match outcome {
                        Ok(response) => resolved.succeed(generation, response.url),
                        Err(error) => resolved.fail(generation, CreateError::from_api(&error)),
                    };
                    if changed {
                        flow.set(resolved);
                    }
                });
            }
        }
    };

    let on_copy = Callback::new(move |_| {
        if let Some(url) = result_url() {
            clipboard::copy_with_feedback(url, copied, copy_generation);
        }
    });

    let on_new_link = Callback::new(move |_| {
        set_text.set(String::new());
        set_password.set(String::new());
        set_expire.set(DEFAULT_EXPIRE.to_string());
        set_one_time_view.set(false);
        set_one_time_password.set(false);
        copied.set(false);

        let mut current = flow.get_untracked();
        current.reset();
        flow.set(current);
    });

    view! {
        <div class="max-w-2xl mx-auto px-4 py-8">
            <Header/>

            <Show when=move || result_url().is_none()>
                <form
                    class="bg-white dark:bg-slate-800 rounded-2xl shadow-sm border border-slate-200 dark:border-slate-700 p-6 sm:p-8 space-y-5"
                    on:submit=on_submit
                >
                    <Show when=move || error_message().is_some()>
                        <Alert variant=AlertVariant::Error>
                            {move || error_message().unwrap_or_default()}
                        </Alert>
                    </Show>

                    <div>
                        <label class="block text-sm font-medium text-slate-700 dark:text-slate-300 mb-1.5">
                            {move || prefs.t(Text::ContentLabel)}
                        </label>
                        <textarea
                            rows=8
                            class="w-full rounded-xl border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 text-slate-900 dark:text-slate-100 px-3.5 py-2.5 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            placeholder=move || prefs.t(Text::ContentPlaceholder)
                            prop:value=move || text.get()
                            on:input=move |ev| set_text.set(event_target_value(&ev))
                        ></textarea>
                        <p class="mt-1.5 text-xs text-slate-500 dark:text-slate-400">
                            {move || prefs.t(Text::ContentHint)}
                        </p>
                    </div>

                    <div class="grid sm:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-slate-700 dark:text-slate-300 mb-1.5">
                                {move || prefs.t(Text::PasswordLabel)}
                            </label>
                            <input
                                type="password"
                                autocomplete="new-password"
                                class="w-full rounded-xl border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 text-slate-900 dark:text-slate-100 px-3.5 py-2.5 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-slate-700 dark:text-slate-300 mb-1.5">
                                {move || prefs.t(Text::ExpireLabel)}
                            </label>
                            <select
                                class="w-full rounded-xl border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 text-slate-900 dark:text-slate-100 px-3.5 py-2.5 text-sm focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                prop:value=move || expire.get()
                                on:change=move |ev| set_expire.set(event_target_value(&ev))
                            >
                                {EXPIRE_OPTIONS
                                    .iter()
                                    .map(|(minutes, label)| {
                                        let minutes = minutes.to_string();
                                        let label = *label;
                                        let value = minutes.clone();
                                        view! {
                                            <option
                                                value=value
                                                selected=move || expire.get() == minutes
                                            >
                                                {move || prefs.t(label)}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="space-y-2.5">
                        <label class="flex items-center gap-2.5 text-sm text-slate-700 dark:text-slate-300 cursor-pointer">
                            <input
                                type="checkbox"
                                class="rounded border-slate-300 dark:border-slate-600 text-indigo-600 focus:ring-indigo-500"
                                prop:checked=move || one_time_view.get()
                                on:change=move |ev| set_one_time_view.set(event_target_checked(&ev))
                            />
                            {move || prefs.t(Text::OneTimeView)}
                        </label>
                        <label class="flex items-center gap-2.5 text-sm text-slate-700 dark:text-slate-300 cursor-pointer">
                            <input
                                type="checkbox"
                                class="rounded border-slate-300 dark:border-slate-600 text-indigo-600 focus:ring-indigo-500"
                                prop:checked=move || one_time_password.get()
                                on:change=move |ev| set_one_time_password.set(event_target_checked(&ev))
                            />
                            {move || prefs.t(Text::OneTimePassword)}
                        </label>
                    </div>

                    <button
                        type="submit"
                        class="w-full inline-flex items-center justify-center gap-2 px-4 py-2.5 rounded-xl font-medium text-sm bg-indigo-600 hover:bg-indigo-700 dark:bg-indigo-500 dark:hover:bg-indigo-600 text-white transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || flow.get().is_submitting()
                    >
                        <Show when=move || flow.get().is_submitting()>
                            <Spinner/>
                        </Show>
                        {move || prefs.t(Text::CreateBtn)}
                    </button>
                </form>
            </Show>

            <Show when=move || result_url().is_some()>
                <div class="bg-white dark:bg-slate-800 rounded-2xl shadow-sm border border-slate-200 dark:border-slate-700 p-6 sm:p-8">
                    <label class="block text-sm font-medium text-slate-700 dark:text-slate-300 mb-1.5">
                        {move || prefs.t(Text::YourLink)}
                    </label>
                    <div class="flex gap-2">
                        <input
                            type="text"
                            readonly
                            dir="ltr"
                            class="flex-1 rounded-xl border border-slate-300 dark:border-slate-600 bg-slate-50 dark:bg-slate-900 text-slate-900 dark:text-slate-100 px-3.5 py-2.5 text-sm font-mono"
                            prop:value=move || result_url().unwrap_or_default()
                        />
                        <Button on_click=on_copy>
                            {move || {
                                if copied.get() { prefs.t(Text::Copied) } else { prefs.t(Text::Copy) }
                            }}
                        </Button>
                    </div>
                    <div class="mt-4">
                        <Button variant=ButtonVariant::Secondary on_click=on_new_link>
                            {move || prefs.t(Text::CreateAnother)}
                        </Button>
                    </div>
                </div>
            </Show>

            <p class="mt-6 text-center text-xs text-slate-500 dark:text-slate-400">
                {move || prefs.t(Text::Footer)}
            </p>
        </div>
    }
}
