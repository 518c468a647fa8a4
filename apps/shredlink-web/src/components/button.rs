use leptos::ev;
use leptos::prelude::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] disabled: Signal<bool>,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let base = "inline-flex items-center justify-center gap-2 px-4 py-2.5 rounded-xl font-medium text-sm transition-colors disabled:opacity-50 disabled:cursor-not-allowed";

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-indigo-600 hover:bg-indigo-700 dark:bg-indigo-500 dark:hover:bg-indigo-600 text-white"
        }
        ButtonVariant::Secondary => {
            "bg-slate-100 hover:bg-slate-200 dark:bg-slate-700 dark:hover:bg-slate-600 text-slate-700 dark:text-slate-200"
        }
    };

    view! {
        <button
            type="button"
            class=format!("{} {} {}", base, variant_class, class)
            disabled=move || disabled.get()
            on:click=move |e| {
                if let Some(handler) = on_click {
                    handler.run(e);
                }
            }
        >
            {children()}
        </button>
    }
}
