//! Journal Feed Page
//!
//! The authenticated home view: entries in the order the server returned
//! them, newest first.

use leptos::*;
use leptos_router::Redirect;

use crate::api;
use crate::components::{EntryCard, Fab, Nav};
use crate::model::JournalEntry;
use crate::state::SessionState;

/// Feed page, gated on the session.
#[component]
pub fn Journal() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let user = session.user;
    let loading = session.loading;

    view! {
        {move || {
            if loading.get() {
                // Render nothing until the session probe settles
                view! {}.into_view()
            } else if user.get().is_none() {
                view! { <Redirect path="/login" /> }.into_view()
            } else {
                view! { <JournalFeed /> }.into_view()
            }
        }}
    }
}

/// The feed itself; mounted only once a user is present.
#[component]
fn JournalFeed() -> impl IntoView {
    let (entries, set_entries) = create_signal(Vec::<JournalEntry>::new());

    // One fetch on mount; the list is stored verbatim, never re-sorted
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_entries().await {
                Ok(list) => set_entries.set(list),
                Err(e) => {
                    // Keep whatever is already displayed; no banner, no retry
                    web_sys::console::error_1(&format!("Failed to fetch entries: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="min-h-screen text-white">
            <Nav />

            <main class="max-w-7xl mx-auto p-4 md:p-6 lg:p-8 pt-24">
                <div class="space-y-8">
                    {move || {
                        let list = entries.get();
                        if list.is_empty() {
                            view! {
                                <p class="text-center text-gray-400">
                                    "No entries yet. Click the '+' to add one!"
                                </p>
                            }
                            .into_view()
                        } else {
                            list.into_iter()
                                .map(|entry| view! { <EntryCard entry=entry /> })
                                .collect_view()
                        }
                    }}
                </div>
            </main>

            <Fab />
        </div>
    }
}
