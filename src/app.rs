//! App Root Component
//!
//! Routing and the session context provider.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{Create, Journal, Login, Register};
use crate::state::provide_session_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the session context and probe for an existing session
    provide_session_state();

    view! {
        <Router>
            // Fixed gradient backdrop behind every view
            <div class="fixed top-0 left-0 -z-10 h-full w-full bg-gradient-to-b from-[#680577] to-[#0e0018]" />

            <Routes>
                <Route path="/" view=Journal />
                <Route path="/create" view=Create />
                <Route path="/login" view=Login />
                <Route path="/register" view=Register />
                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center text-white">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Journal"
            </A>
        </div>
    }
}
