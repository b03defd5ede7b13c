//! Login Screen
//!
//! Password sign-in against the auth endpoint. A successful login
//! stores the session and lands on the recipe manager.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ErrorBanner;
use crate::context::AppContext;
use crate::route::Route;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email = email.get();
        let password = password.get();
        if email.trim().is_empty() || password.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::sign_in(&email, &password).await {
                Ok(session) => {
                    web_sys::console::log_1(
                        &format!("[Login] Signed in as {}", session.user.email).into(),
                    );
                    ctx.sign_in(session);
                    ctx.navigate(Route::Recipes);
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
            <h1>"Log in"</h1>

            {move || ctx.flash.get().map(|notice| view! {
                <div class="flash-notice">{notice}</div>
            })}

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
                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>

            <p class="auth-switch">
                "No account yet? "
                <a on:click=move |_| ctx.navigate(Route::Register)>"Register"</a>
            </p>
        </div>
    }
}
