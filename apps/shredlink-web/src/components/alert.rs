use leptos::prelude::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum AlertVariant {
    #[default]
    Success,
    Error,
}

#[component]
pub fn Alert(
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let base = "p-3 rounded-xl text-sm border";

    let variant_class = match variant {
        AlertVariant::Success => {
            "border-emerald-200 bg-emerald-50 text-emerald-700 dark:border-emerald-900 dark:bg-emerald-950 dark:text-emerald-300"
        }
        AlertVariant::Error => {
            "border-red-200 bg-red-50 text-red-700 dark:border-red-900 dark:bg-red-950 dark:text-red-300"
        }
    };

    view! {
        <div class=format!("{} {} {}", base, variant_class, class)>
            {children()}
        </div>
    }
}
