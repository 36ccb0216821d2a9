//! Entry Composer Page
//!
//! Multi-step form accumulating an ordered pending-tile list through three
//! modal flows, submitted as one creation request.

use leptos::*;
use leptos_router::{use_navigate, Redirect};

use crate::api;
use crate::components::create::{ImageTileModal, MusicTileModal, WorkoutTileModal};
use crate::model::{EntryDraft, TileKind};
use crate::state::SessionState;

/// Composer page, gated on the session like the feed.
#[component]
pub fn Create() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let user = session.user;
    let loading = session.loading;

    view! {
        {move || {
            if loading.get() {
                view! {}.into_view()
            } else if user.get().is_none() {
                view! { <Redirect path="/login" /> }.into_view()
            } else {
                view! { <CreateForm /> }.into_view()
            }
        }}
    }
}

/// The composer form itself.
#[component]
fn CreateForm() -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let draft = create_rw_signal(EntryDraft::default());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let (show_image, set_show_image) = create_signal(false);
    let (show_music, set_show_music) = create_signal(false);
    let (show_workout, set_show_workout) = create_signal(false);

    let navigate = use_navigate();
    let navigate_for_cancel = navigate.clone();

    let session_for_submit = session.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current = draft.get();
        if let Err(e) = current.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);

        let session = session_for_submit.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_entry(&current).await {
                Ok(()) => {
                    draft.set(EntryDraft::default());
                    session.show_success("Entry created");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    // Form state is kept so the user can resubmit
                    set_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex min-h-screen items-center justify-center p-4">
            <div class="w-full max-w-2xl glass-outer p-6 text-white">
                <h1 class="text-3xl font-bold mb-6">"Create New Entry"</h1>

                <form on:submit=on_submit class="space-y-6">
                    // Title
                    <div class="space-y-2">
                        <label for="title" class="block text-lg">"Title"</label>
                        <input
                            id="title"
                            type="text"
                            required=true
                            prop:value=move || draft.get().title
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-lg
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Description
                    <div class="space-y-2">
                        <label for="description" class="block text-lg">"Description"</label>
                        <textarea
                            id="description"
                            prop:value=move || draft.get().description
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Pending tile preview
                    <div>
                        <span class="block text-lg">"Content Tiles"</span>
                        <div class="p-4 mt-2 bg-gray-700 rounded-lg min-h-[50px]">
                            {move || {
                                let tiles = draft.get().tiles;
                                if tiles.is_empty() {
                                    view! {
                                        <p class="text-center text-gray-300">
                                            "Add content using the buttons below."
                                        </p>
                                    }
                                    .into_view()
                                } else {
                                    view! {
                                        <div class="grid grid-cols-4 gap-2">
                                            {tiles.into_iter().map(|tile| {
                                                let label = match tile.kind {
                                                    TileKind::Image => "image",
                                                    TileKind::Workout => "workout",
                                                    TileKind::Music => "music",
                                                    TileKind::Unknown => "tile",
                                                };
                                                view! {
                                                    <div class="aspect-square bg-purple-900 rounded-md
                                                                flex items-center justify-center text-xs p-1">
                                                        {label}
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    }
                                    .into_view()
                                }
                            }}
                        </div>
                    </div>

                    // Acquisition flows
                    <div class="flex items-center gap-4">
                        <button
                            type="button"
                            on:click=move |_| set_show_music.set(true)
                            class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                        >
                            "Add Music"
                        </button>
                        <button
                            type="button"
                            on:click=move |_| set_show_workout.set(true)
                            class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                        >
                            "Add Workout"
                        </button>
                        <button
                            type="button"
                            on:click=move |_| set_show_image.set(true)
                            class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                        >
                            "Add Image"
                        </button>
                    </div>

                    // Inline error line
                    {move || error.get().map(|e| view! {
                        <p class="text-red-400">{e}</p>
                    })}

                    // Actions
                    <div class="flex justify-end gap-4 pt-4">
                        <button
                            type="button"
                            on:click=move |_| navigate_for_cancel("/", Default::default())
                            class="px-4 py-2 hover:bg-white/10 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   disabled:cursor-not-allowed rounded-lg font-medium transition-colors"
                        >
                            {move || if submitting.get() { "Saving..." } else { "Save Entry" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>

        // Acquisition modals, mounted only while open
        {move || {
            if show_image.get() {
                view! {
                    <ImageTileModal
                        on_close=move || set_show_image.set(false)
                        on_tile=move |kind, content| draft.update(|d| d.push_tile(kind, content))
                    />
                }
                .into_view()
            } else {
                view! {}.into_view()
            }
        }}
        {move || {
            if show_music.get() {
                view! {
                    <MusicTileModal
                        on_close=move || set_show_music.set(false)
                        on_tile=move |kind, content| draft.update(|d| d.push_tile(kind, content))
                    />
                }
                .into_view()
            } else {
                view! {}.into_view()
            }
        }}
        {move || {
            if show_workout.get() {
                view! {
                    <WorkoutTileModal
                        on_close=move || set_show_workout.set(false)
                        on_tile=move |kind, content| draft.update(|d| d.push_tile(kind, content))
                    />
                }
                .into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}
