use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::{create::CreatePage, not_found::NotFoundPage, unlock::UnlockPage};
use crate::state::prefs::PrefsProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Meta name="description" content="ShredLink - share text through ephemeral, self-destructing links"/>

        <Title text="ShredLink"/>

        <PrefsProvider>
            <Router>
                <main class="min-h-screen bg-slate-50 dark:bg-slate-900 text-slate-800 dark:text-slate-200 antialiased">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=path!("/") view=CreatePage/>
                        <Route path=path!("/unlock") view=UnlockPage/>
                    </Routes>
                </main>
            </Router>
        </PrefsProvider>
    }
}
