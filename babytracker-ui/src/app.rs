//! App Root Component
//!
//! Header, navigation and the routed view.

use babytracker::{resolve, Navigation, Route};
use leptos::*;
use leptos_router::*;

use crate::api::GlooTransport;
use crate::components::Nav;
use crate::pages::{Feeds, Growth, Sleep, SusuPoty};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(GlooTransport::from_storage());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <header class="bg-gray-800 border-b border-gray-700">
                    <div class="container mx-auto px-4 py-4">
                        <h1 class="text-2xl font-bold">"Baby Tracker"</h1>
                    </div>
                    <Nav />
                </header>

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/*any" view=RoutedView />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Picks the view for the current location. Each navigation builds the view
/// from scratch.
#[component]
fn RoutedView() -> impl IntoView {
    let location = use_location();
    let navigation = create_memo(move |_| resolve(&location.pathname.get()));

    move || match navigation.get() {
        Navigation::Redirect(route) => view! { <Redirect path=route.path() /> }.into_view(),
        Navigation::Show(Route::Feeds) => view! { <Feeds /> }.into_view(),
        Navigation::Show(Route::Sleep) => view! { <Sleep /> }.into_view(),
        Navigation::Show(Route::Growth) => view! { <Growth /> }.into_view(),
        Navigation::Show(Route::SusuPoty) => view! { <SusuPoty /> }.into_view(),
        Navigation::NotFound => view! { <NotFound /> }.into_view(),
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"404 Not Found"</h1>
            <A
                href=Route::DEFAULT.path()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Feeds"
            </A>
        </div>
    }
}
