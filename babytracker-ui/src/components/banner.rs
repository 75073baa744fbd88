//! Banner Component
//!
//! Success and error messages above a form.

use leptos::*;

#[derive(Clone, Copy)]
pub enum BannerVariant {
    Success,
    Error,
}

#[component]
pub fn Banner(
    #[prop(into)]
    message: String,
    variant: BannerVariant,
) -> impl IntoView {
    let (icon, bg_class) = match variant {
        BannerVariant::Success => ("✓", "bg-green-600"),
        BannerVariant::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg mb-4",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
