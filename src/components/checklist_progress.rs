//! Checklist Progress Component
//!
//! Checkboxes update the store immediately, while the progress label only
//! moves when "Submit version" is pressed. At that point the live aggregates
//! are copied into the gate in a single signal write, so the label never
//! shows a half-updated value.

use leptos::prelude::*;

use checklist_core::SubmitGate;

use crate::components::{ChecklistRow, ProgressStatus, SubmitButton};
use crate::context::use_checklist;
use crate::store::ChecklistStateStoreFields;

/// Submit-gated checklist widget
#[component]
pub fn ChecklistProgress() -> impl IntoView {
    let ctx = use_checklist();

    // Idle(snapshot); toggles never write here
    let gate = RwSignal::new(SubmitGate::mount(&ctx.snapshot_items(), &ctx.config));
    let label = Signal::derive(move || gate.with(|gate| gate.label()));

    let submit = move |_: ()| {
        let aggregates = ctx.aggregates.get_untracked();
        gate.update(|gate| {
            let snapshot = gate.capture(aggregates);
            log::info!(target: "checklist", "submit: {}", snapshot);
        });
    };

    view! {
        <section class="checklist-progress">
            <ul class="checklist">
                <For
                    each=move || ctx.store.items().get()
                    key=|item| item.id
                    children=move |item| view! { <ChecklistRow item=item /> }
                />
            </ul>
            <ProgressStatus label=label />
            <SubmitButton on_submit=submit />
        </section>
    }
}
