//! Application Shell
//!
//! Builds the shared context from whatever the browser already knows
//! (stored session, current hash), listens for hash changes, and keeps
//! anonymous visitors off the protected screens.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::NavBar;
use crate::context::{self, AppContext};
use crate::pages::{
    HomePage, LoginPage, RecipeDetailPage, RecipeEditPage, RecipeListPage, RecipeNewPage,
    RegisterPage,
};
use crate::route::Route;

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let initial_session = context::load_stored_session();
    let initial_route = Route::from_hash(&current_hash());

    let (route, set_route) = signal(initial_route);
    let (session, set_session) = signal(initial_session);
    let (flash, set_flash) = signal::<Option<String>>(None);

    let ctx = AppContext::new((route, set_route), (session, set_session), (flash, set_flash));
    provide_context(ctx);

    // Back/forward buttons only move the hash; mirror them into the route.
    let hash_listener = Closure::<dyn FnMut()>::new(move || {
        ctx.sync_route_from_hash(Route::from_hash(&current_hash()));
    });
    if let Some(window) = web_sys::window() {
        window.set_onhashchange(Some(hash_listener.as_ref().unchecked_ref()));
    }
    hash_listener.forget();

    Effect::new(move |_| {
        if route.get().requires_session() && session.get().is_none() {
            web_sys::console::log_1(&"[App] Not signed in, redirecting to login".into());
            ctx.navigate(Route::Login);
        }
    });

    view! {
        <NavBar />
        <main class="app-main">
            {move || {
                let current = route.get();
                // The redirect effect fires right after; show login meanwhile.
                if current.requires_session() && session.get().is_none() {
                    return view! { <LoginPage /> }.into_any();
                }
                match current {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Login => view! { <LoginPage /> }.into_any(),
                    Route::Register => view! { <RegisterPage /> }.into_any(),
                    Route::Recipes => view! { <RecipeListPage /> }.into_any(),
                    Route::RecipeNew => view! { <RecipeNewPage /> }.into_any(),
                    Route::RecipeDetail(id) => view! { <RecipeDetailPage id=id /> }.into_any(),
                    Route::RecipeEdit(id) => view! { <RecipeEditPage id=id /> }.into_any(),
                }
            }}
        </main>
    }
}
