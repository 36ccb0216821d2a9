//! Image Tile Modal
//!
//! Pick a local file, upload it as multipart form data and turn the stored
//! URL into an image tile.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::InlineLoading;
use crate::model::TileKind;
use crate::state::SessionState;

/// Modal for the image acquisition flow.
#[component]
pub fn ImageTileModal(
    on_close: impl Fn() + 'static + Clone,
    on_tile: impl Fn(TileKind, String) + 'static + Clone,
) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");

    let (file, set_file) = create_signal(None::<web_sys::File>);
    let (uploading, set_uploading) = create_signal(false);

    let on_close_for_x = on_close.clone();

    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        let picked = input.files().and_then(|files| files.get(0));
        set_file.set(picked);
    };

    let on_upload = move |_| {
        if let Some(f) = file.get() {
            set_uploading.set(true);

            let session = session.clone();
            let on_tile = on_tile.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                match api::upload_image(&f).await {
                    Ok(url) => {
                        on_tile(TileKind::Image, url);
                        on_close();
                    }
                    Err(e) => {
                        session.show_error(&e.to_string());
                    }
                }
                set_uploading.set(false);
            });
        }
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"Add Image Tile"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <div class="p-4 border-2 border-dashed border-gray-600 rounded-lg text-center">
                    <label
                        class="inline-flex items-center justify-center px-4 py-2 bg-gray-600
                               hover:bg-gray-500 rounded-lg cursor-pointer transition-colors"
                    >
                        <input
                            type="file"
                            accept="image/*"
                            class="hidden"
                            on:change=on_file_change
                            disabled=move || uploading.get()
                        />
                        "Choose File"
                    </label>

                    {move || file.get().map(|f| view! {
                        <p class="mt-2 text-sm text-gray-400">{f.name()}</p>
                    })}
                </div>

                <div class="flex justify-end pt-4">
                    <button
                        on:click=on_upload
                        disabled=move || uploading.get() || file.get().is_none()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg font-medium transition-colors
                               flex items-center space-x-2"
                    >
                        {move || if uploading.get() {
                            view! {
                                <InlineLoading />
                                <span>"Uploading..."</span>
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
