//! Floating Action Button
//!
//! Fixed "+" button that opens the entry composer.

use leptos::*;
use leptos_router::*;

/// Floating action button for creating a new entry.
#[component]
pub fn Fab() -> impl IntoView {
    view! {
        <A
            href="/create"
            class="fixed bottom-8 right-8 h-14 w-14 rounded-full bg-[#33006679] hover:bg-[#27004e57]
                   shadow-lg backdrop-blur-md flex items-center justify-center"
        >
            <span class="text-3xl text-white">"+"</span>
        </A>
    }
}
