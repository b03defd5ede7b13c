//! Nav Bar Component
//!
//! Top navigation: brand, section links, session controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::route::Route;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let sign_out = move |_| {
        let Some(session) = ctx.session.get() else {
            return;
        };
        // Local state first; the service call is best effort
        ctx.sign_out();
        spawn_local(async move {
            if let Err(e) = api::sign_out(&session).await {
                web_sys::console::warn_1(&format!("[NavBar] Sign-out call failed: {e}").into());
            }
        });
        ctx.navigate(Route::Home);
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-brand" on:click=move |_| ctx.navigate(Route::Home)>"Potluck"</a>
            <div class="nav-links">
                <a class="nav-link" on:click=move |_| ctx.navigate(Route::Home)>"Home"</a>
                <a class="nav-link" on:click=move |_| ctx.navigate(Route::Recipes)>"My recipes"</a>
            </div>
            <div class="nav-session">
                {move || match ctx.session.get() {
                    Some(session) => view! {
                        <span class="nav-session-inner">
                            <span class="nav-user">{session.user.email.clone()}</span>
                            <button class="nav-link" on:click=sign_out>"Sign out"</button>
                        </span>
                    }
                    .into_any(),
                    None => view! {
                        <span class="nav-session-inner">
                            <a class="nav-link" on:click=move |_| ctx.navigate(Route::Login)>"Log in"</a>
                            <a class="nav-link" on:click=move |_| ctx.navigate(Route::Register)>"Register"</a>
                        </span>
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}
