//! Checklist Row Component
//!
//! One checkbox bound live to the store.

use leptos::prelude::*;

use checklist_core::Item;

use crate::context::use_checklist;

/// A single item row. The `<label>` wrapper gives the checkbox its
/// accessible name.
#[component]
pub fn ChecklistRow(item: Item) -> impl IntoView {
    let ctx = use_checklist();
    let id = item.id;
    let checked = move || ctx.is_done(id);

    view! {
        <li class=move || if checked() { "checklist-row done" } else { "checklist-row" }>
            <label>
                <input
                    type="checkbox"
                    data-testid=format!("item-{}", id)
                    prop:checked=checked
                    on:change=move |_| ctx.toggle(id)
                />
                <span class="item-label">{item.label}</span>
            </label>
        </li>
    }
}
