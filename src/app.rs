//! Progress Checklist App
//!
//! Page shell: heading, seed picker and the checklist itself.

use leptos::prelude::*;

use checklist_core::seeds;

use crate::components::{ChecklistProgress, SeedPicker};
use crate::config::AppConfig;
use crate::context::ChecklistContext;
use crate::store::ChecklistStateStoreFields;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // One store per mounted app; nothing is shared between instances
    let ctx = ChecklistContext::new(config.checklist);
    provide_context(ctx);

    let initial = seeds::by_name(&config.seed).unwrap_or_else(|err| {
        log::warn!(target: "app", "{}, using default seed", err);
        seeds::default_items()
    });
    ctx.seed_if_empty(initial);

    view! {
        <main class="main-content">
            <h1 data-testid="title">"Progress Checklist"</h1>

            <SeedPicker />

            // A new seed is a new view instance with a fresh snapshot
            {move || {
                let generation = ctx.store.generation().get();
                log::debug!(target: "app", "mounting checklist, generation={}", generation);
                view! { <ChecklistProgress /> }
            }}
        </main>
    }
}
