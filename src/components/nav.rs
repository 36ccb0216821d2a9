//! Journal Header
//!
//! Fixed header with the app title and the logout action.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::SessionState;

/// Header shown on the authenticated journal views.
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    let on_logout = move |_| {
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            session.logout().await;
            navigate("/login", Default::default());
        });
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md">
            <div class="max-w-7xl mx-auto px-4 py-4 flex items-center justify-between">
                <h1 class="text-4xl font-bold text-white">"Journal"</h1>
                <button
                    on:click=on_logout
                    class="px-4 py-2 rounded-lg text-white hover:bg-white/10 transition-colors"
                >
                    "Logout"
                </button>
            </div>
        </header>
    }
}
