//! Journal Entry Card
//!
//! One feed entry: the date heading, the tile grid and the title/description
//! footer.

use leptos::*;

use crate::components::{PlaceholderTile, TileView};
use crate::model::{arrange, format_entry_date, JournalEntry};

/// Card for a single journal entry.
#[component]
pub fn EntryCard(entry: JournalEntry) -> impl IntoView {
    let layout = arrange(&entry.tiles);
    let date = format_entry_date(&entry.entry_date);
    let description = entry.description.clone().unwrap_or_default();

    view! {
        <div class="space-y-4">
            // Date sits outside and above the card
            <div class="flex justify-between items-center px-2">
                <h3 class="text-3xl font-bold text-white">{date}</h3>
            </div>

            <div class="glass-outer">
                <div class="glass-inner p-2">
                    <div class="grid grid-cols-3 gap-3">
                        // Featured slot: 2x2 region, placeholder when no rank-0 tile
                        <div class="col-span-2 row-span-2 rounded-2xl flex items-center justify-center aspect-square overflow-hidden">
                            {match layout.featured {
                                Some(tile) => view! { <TileView tile=tile /> }.into_view(),
                                None => view! { <PlaceholderTile /> }.into_view(),
                            }}
                        </div>

                        // Secondary slots in ascending rank order
                        {layout
                            .secondary
                            .into_iter()
                            .map(|tile| view! {
                                <div class="aspect-square rounded-2xl overflow-hidden">
                                    <TileView tile=tile />
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                // Footer with title and description
                <div class="px-6 py-4">
                    <h2 class="text-2xl font-bold text-white">{entry.title.clone()}</h2>
                    <p class="text-sm text-gray-200">{description}</p>
                </div>
            </div>
        </div>
    }
}
