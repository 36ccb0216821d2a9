//! Tile Content Renderer
//!
//! Renders a tile's payload by kind. A payload that fails to parse, or a kind
//! this client does not know, becomes the generic placeholder; nothing on this
//! path ever propagates an error to the caller.

use leptos::*;

use crate::api;
use crate::model::{resolve_media_url, MusicContent, Tile, TileContent, WorkoutContent, WorkoutIcon};

/// Render one tile's content.
#[component]
pub fn TileView(tile: Tile) -> impl IntoView {
    match tile.parse_content() {
        Ok(TileContent::Image(path)) => {
            let url = resolve_media_url(&api::get_api_base(), &path);
            let url_for_log = url.clone();

            view! {
                <img
                    src=url
                    alt="Journal tile"
                    class="w-full h-full object-cover"
                    on:error=move |_| {
                        // Logged only; no retry, no substitute image
                        web_sys::console::error_1(
                            &format!("Failed to load tile image: {}", url_for_log).into(),
                        );
                    }
                />
            }
            .into_view()
        }
        Ok(TileContent::Music(music)) => view! { <MusicTile music=music /> }.into_view(),
        Ok(TileContent::Workout(workout)) => view! { <WorkoutTile workout=workout /> }.into_view(),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to parse tile content: {}", e).into());
            view! { <PlaceholderTile /> }.into_view()
        }
    }
}

/// Music tile: album art with an overlaid caption, or a text-only fallback
/// when the match came without art.
#[component]
fn MusicTile(music: MusicContent) -> impl IntoView {
    match music.image_url.clone() {
        Some(art) => view! {
            <div class="w-full h-full relative">
                <img
                    src=art
                    alt=format!("Album art for {}", music.song)
                    class="w-full h-full object-cover"
                />
                <div class="absolute bottom-0 left-0 right-0 bg-black/60 p-1">
                    <p class="font-bold text-white text-xs truncate">{music.song.clone()}</p>
                    <p class="text-xs text-gray-300 truncate">{music.artist.clone()}</p>
                </div>
            </div>
        }
        .into_view(),
        None => view! {
            <div class="w-full h-full flex flex-col items-center justify-center p-2 text-center text-white bg-slate-800">
                <p class="font-bold">{music.song.clone()}</p>
                <p class="text-sm text-gray-400">{music.artist.clone()}</p>
            </div>
        }
        .into_view(),
    }
}

/// Workout tile: icon plus primary label and secondary value.
#[component]
fn WorkoutTile(workout: WorkoutContent) -> impl IntoView {
    let icon = WorkoutIcon::from_icon_type(&workout.icon_type);

    view! {
        <div class="w-full h-full flex flex-col items-center justify-center p-2 gap-1 bg-[#33006679] text-white">
            <img src=icon.asset_path() alt="workout icon" class="w-8 h-8" />
            <div class="text-center leading-tight">
                <p class="font-semibold text-sm whitespace-nowrap">{workout.text}</p>
                <p class="text-xs text-gray-300">{workout.value}</p>
            </div>
        </div>
    }
}

/// Generic placeholder square, used for the empty featured slot and any tile
/// that cannot be rendered.
#[component]
pub fn PlaceholderTile() -> impl IntoView {
    view! { <div class="w-full h-full aspect-square bg-black/20 rounded-lg" /> }
}
