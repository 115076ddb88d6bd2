//! Progress Status Component

use leptos::prelude::*;

/// Live region showing the submitted progress label
#[component]
pub fn ProgressStatus(#[prop(into)] label: Signal<String>) -> impl IntoView {
    view! {
        <p class="progress-label" role="status" aria-live="polite" data-testid="progress-label">
            {move || label.get()}
        </p>
    }
}
