//! Language and theme preferences, persisted across page loads.
//!
//! Both values live in localStorage and in a pair of signals provided as
//! context at the app root. Every translated string reads the language
//! signal, so a switch re-renders the whole visible surface, including views
//! created after the initial load. Writes are immediately followed by the
//! matching document-level side effect so observed state never diverges from
//! persisted state.

use leptos::prelude::*;
use shredlink_core::{tr, Lang, Text};

use crate::services::storage;

pub const LANG_KEY: &str = "shredlink_lang";
pub const DARK_KEY: &str = "shredlink_dark";

#[derive(Clone, Copy)]
pub struct PrefsContext {
    lang: RwSignal<Lang>,
    dark: RwSignal<bool>,
}

impl PrefsContext {
    /// Read persisted preferences. A missing or corrupted language value
    /// falls back to English; a missing dark-mode value falls back to the
    /// environment's color-scheme preference.
    fn load() -> Self {
        let lang = Lang::from_code(&storage::get_item(LANG_KEY).unwrap_or_default());
        let dark = match storage::get_item(DARK_KEY).as_deref() {
            Some("1") => true,
            Some(_) => false,
            None => system_prefers_dark(),
        };
        Self {
            lang: RwSignal::new(lang),
            dark: RwSignal::new(dark),
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang.get()
    }

    /// Translate a key in the current language (reactive).
    pub fn t(&self, text: Text) -> &'static str {
        tr(self.lang.get(), text)
    }

    pub fn set_lang(&self, lang: Lang) {
        self.lang.set(lang);
        storage::set_item(LANG_KEY, lang.code());
        apply_lang(lang);
    }

    pub fn dark(&self) -> bool {
        self.dark.get()
    }

    pub fn toggle_dark(&self) {
        let dark = !self.dark.get_untracked();
        self.dark.set(dark);
        storage::set_item(DARK_KEY, if dark { "1" } else { "0" });
        apply_dark(dark);
    }

    /// Push the current preferences onto the document element. Called once
    /// at startup; afterwards the setters keep the document in sync.
    fn apply(&self) {
        apply_lang(self.lang.get_untracked());
        apply_dark(self.dark.get_untracked());
    }
}

/// Provide the preferences context to the application.
#[component]
pub fn PrefsProvider(children: Children) -> impl IntoView {
    let prefs = PrefsContext::load();
    prefs.apply();
    provide_context(prefs);

    children()
}

/// Get the preferences context from anywhere in the component tree.
pub fn use_prefs() -> PrefsContext {
    expect_context::<PrefsContext>()
}

#[cfg(target_arch = "wasm32")]
fn apply_lang(lang: Lang) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", lang.code());
        let _ = root.set_attribute("dir", lang.dir());
        let _ = root.set_attribute("data-lang", lang.code());
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_dark(dark: bool) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().toggle_with_force("dark", dark);
    }
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_lang(_lang: Lang) {}

#[cfg(not(target_arch = "wasm32"))]
fn apply_dark(_dark: bool) {}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    false
}
