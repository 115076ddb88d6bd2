//! Submit Button Component

use leptos::prelude::*;

/// "Submit version" button
///
/// # Arguments
/// * `on_submit` - Callback run on every click
#[component]
pub fn SubmitButton(#[prop(into)] on_submit: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="submit-btn"
            data-testid="submit-version"
            on:click=move |_| on_submit.run(())
        >
            "Submit version"
        </button>
    }
}
