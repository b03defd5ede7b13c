//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click arms the confirmation, only
//! the second click fires the callback.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `disabled` - true while the delete request is in flight
/// * `on_confirm` - callback to execute when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        <Show when=move || !armed.get()>
            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_armed.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || armed.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete this recipe?"</span>
                <button
                    class="confirm-btn"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    {move || if disabled.get() { "Deleting..." } else { "Yes, delete" }}
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}
