//! Register Screen
//!
//! Sign-up form with a live password strength meter. A created account
//! is bounced to the login screen with a notice rather than signed in
//! directly.

use leptos::prelude::*;
use leptos::task::spawn_local;

use potluck_core::{auth, PasswordStrength};

use crate::api;
use crate::components::ErrorBanner;
use crate::context::AppContext;
use crate::route::Route;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let strength = Memo::new(move |_| PasswordStrength::rate(&password.get()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email = email.get();
        let password = password.get();
        if let Err(msg) = auth::check_registration(&email, &password, &confirm.get()) {
            set_error.set(Some(msg));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::sign_up(&email, &password).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[Register] Account created: {email}").into());
                    ctx.navigate_with_flash(
                        Route::Login,
                        "Account created. Check your inbox, then log in.",
                    );
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Create an account"</h1>

            <ErrorBanner error=error set_error=set_error />

            <form class="auth-form" on:submit=submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || strength.get() != PasswordStrength::None>
                    <div class=move || {
                        format!("strength strength-{}", strength.get().label())
                    }>
                        {move || strength.get().label()}
                    </div>
                </Show>
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        prop:value=confirm
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Register" }}
                </button>
            </form>

            <p class="auth-switch">
                "Already registered? "
                <a on:click=move |_| ctx.navigate(Route::Login)>"Log in"</a>
            </p>
        </div>
    }
}
