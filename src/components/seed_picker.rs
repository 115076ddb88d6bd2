//! Seed Picker Component
//!
//! Demo buttons that reseed the store with one of the named seeds.

use leptos::prelude::*;

use checklist_core::seeds::{self, SEED_NAMES};

use crate::context::use_checklist;

#[component]
pub fn SeedPicker() -> impl IntoView {
    let ctx = use_checklist();

    view! {
        <div class="seed-picker">
            {SEED_NAMES.iter().map(|name| {
                let name = *name;
                view! {
                    <button
                        type="button"
                        class="seed-btn"
                        data-testid=format!("seed-{}", name)
                        on:click=move |_| match seeds::by_name(name) {
                            Ok(items) => ctx.seed(items),
                            Err(err) => log::warn!(target: "app", "{}", err),
                        }
                    >
                        {name}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
