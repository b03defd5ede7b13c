//! Error Banner Component
//!
//! Dismissible banner for request failures. The screen's prior state
//! stays visible behind it; dismissing only clears the message.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(
    error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || error.get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-banner-text">{message}</span>
                <button
                    class="error-banner-dismiss"
                    on:click=move |_| set_error.set(None)
                >
                    "×"
                </button>
            </div>
        })}
    }
}
