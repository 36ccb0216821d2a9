//! Workout Tile Modal
//!
//! Describe a workout in free text; the server interprets it into a
//! structured record which becomes a workout tile directly.

use leptos::*;

use crate::api;
use crate::components::InlineLoading;
use crate::model::TileKind;
use crate::state::SessionState;

/// Modal for the workout acquisition flow.
#[component]
pub fn WorkoutTileModal(
    on_close: impl Fn() + 'static + Clone,
    on_tile: impl Fn(TileKind, String) + 'static + Clone,
) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (prompt, set_prompt) = create_signal(String::new());
    let (generating, set_generating) = create_signal(false);

    let on_close_for_x = on_close.clone();

    let on_generate = move |_| {
        let p = prompt.get();
        if p.is_empty() {
            return;
        }

        set_generating.set(true);

        let session = session.clone();
        let on_tile = on_tile.clone();
        let on_close = on_close.clone();
        spawn_local(async move {
            match api::generate_workout(&p).await {
                Ok(content) => {
                    on_tile(TileKind::Workout, content);
                    on_close();
                }
                Err(e) => {
                    session.show_error(&e.to_string());
                }
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"Add Workout Tile"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <input
                    type="text"
                    placeholder="e.g., Morning run 5km"
                    prop:value=move || prompt.get()
                    on:input=move |ev| set_prompt.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />

                <div class="flex justify-end pt-4">
                    <button
                        on:click=on_generate
                        disabled=move || generating.get()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors flex items-center space-x-2"
                    >
                        {move || if generating.get() {
                            view! {
                                <InlineLoading />
                                <span>"Generating..."</span>
                            }.into_view()
                        } else {
                            view! { <span>"Add Tile"</span> }.into_view()
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
