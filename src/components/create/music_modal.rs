//! Music Tile Modal
//!
//! Search for a song, preview the match and turn the selection into a music
//! tile carrying the serialized `{song, artist, imageUrl}` record.

use leptos::*;

use crate::api;
use crate::components::InlineLoading;
use crate::model::{MusicContent, TileKind};
use crate::state::SessionState;

/// Modal for the music acquisition flow.
#[component]
pub fn MusicTileModal(
    on_close: impl Fn() + 'static + Clone,
    on_tile: impl Fn(TileKind, String) + 'static + Clone,
) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (query, set_query) = create_signal(String::new());
    let (result, set_result) = create_signal(None::<MusicContent>);
    let (searching, set_searching) = create_signal(false);

    let on_close_for_x = on_close.clone();

    let on_search = move |_| {
        let q = query.get();
        if q.is_empty() {
            return;
        }

        set_searching.set(true);
        set_result.set(None);

        let session = session.clone();
        spawn_local(async move {
            match api::generate_music(&q).await {
                Ok(music) => set_result.set(Some(music)),
                Err(e) => {
                    session.show_error(&e.to_string());
                }
            }
            set_searching.set(false);
        });
    };

    let on_select = move |_| {
        if let Some(music) = result.get() {
            if let Ok(content) = serde_json::to_string(&music) {
                on_tile(TileKind::Music, content);
            }
            on_close();
        }
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"Add Music Tile"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <div class="flex space-x-2">
                    <input
                        type="text"
                        placeholder="Search for a song..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=on_search
                        disabled=move || searching.get()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if searching.get() {
                            view! { <InlineLoading /> }.into_view()
                        } else {
                            view! { <span>"Search"</span> }.into_view()
                        }}
                    </button>
                </div>

                // Match preview with select action
                {move || {
                    result.get().map(|music| {
                        let on_select = on_select.clone();
                        view! {
                            <div class="mt-4 p-4 bg-gray-700 rounded-lg flex items-center justify-between">
                                <div class="flex items-center space-x-4">
                                    {music.image_url.clone().map(|art| view! {
                                        <img src=art alt="album art" class="w-12 h-12 rounded-md object-cover" />
                                    })}
                                    <div>
                                        <p class="font-bold">{music.song.clone()}</p>
                                        <p class="text-sm text-gray-400">{music.artist.clone()}</p>
                                    </div>
                                </div>
                                <button
                                    on:click=on_select
                                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700
                                           rounded-lg font-medium transition-colors"
                                >
                                    "Select"
                                </button>
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}
