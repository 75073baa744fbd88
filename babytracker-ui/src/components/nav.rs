//! Navigation Component
//!
//! Links to the four logging views.

use babytracker::Route;
use leptos::*;
use leptos_router::*;

/// Navigation bar
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="container mx-auto px-4">
            <div class="flex items-center space-x-1 h-12">
                {Route::NAV
                    .into_iter()
                    .map(|route| view! { <NavLink href=route.path() label=route.label() /> })
                    .collect_view()}
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
