//! Home Screen
//!
//! Public browse screen: search, tag and sort controls over the shared
//! list pipeline at the default page size. Opening a card needs a
//! session; signed-out visitors land on the login screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use potluck_core::{pipeline, ListViewState, Recipe, SortMode};

use crate::api;
use crate::components::{ErrorBanner, Pagination, RecipeCard, TagFilter};
use crate::context::AppContext;
use crate::route::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (recipes, set_recipes) = signal(Vec::<Recipe>::new());
    let (view_state, set_view_state) = signal(ListViewState::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // One full fetch per visit; the cached list is replaced wholesale
    Effect::new(move |_| {
        set_loading.set(true);
        spawn_local(async move {
            match api::list_recipes().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[Home] Loaded {} recipes", loaded.len()).into(),
                    );
                    set_recipes.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Home] Load failed: {e}").into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let derived = Memo::new(move |_| pipeline::derive(&recipes.get(), &view_state.get()));
    let visible = move || derived.get().0;
    let tags = Signal::derive(move || pipeline::tag_universe(&recipes.get()));

    let open_recipe = move |id: String| {
        // Browsing is public, managing is not
        if ctx.session.get().is_some() {
            ctx.navigate(Route::RecipeDetail(id));
        } else {
            ctx.navigate(Route::Login);
        }
    };

    view! {
        <div class="home-page">
            <header class="hero">
                <h1>"Potluck"</h1>
                <p>"Share what you cook, find what to cook next."</p>
            </header>

            <ErrorBanner error=error set_error=set_error />

            <div class="list-controls">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search recipes..."
                    prop:value=move || view_state.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_view_state.update(|s| s.set_search(value));
                    }
                />
                <TagFilter
                    tags=tags
                    selected=Signal::derive(move || view_state.get().selected_tag)
                    on_select=move |tag| set_view_state.update(|s| s.set_selected_tag(tag))
                />
                <select
                    class="sort-select"
                    prop:value=move || view_state.get().sort.as_str()
                    on:change=move |ev| {
                        let mode = SortMode::from_str(&event_target_value(&ev));
                        set_view_state.update(|s| s.set_sort(mode));
                    }
                >
                    <option value="none">"No sorting"</option>
                    <option value="asc">"Title A-Z"</option>
                    <option value="desc">"Title Z-A"</option>
                    <option value="newest">"Newest first"</option>
                </select>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading recipes..."</div>
            </Show>

            <div class="recipe-grid">
                <For
                    each=visible
                    key=|recipe| recipe.id.clone()
                    children=move |recipe| {
                        view! { <RecipeCard recipe=recipe on_open=open_recipe /> }
                    }
                />
            </div>

            <Show when=move || !loading.get() && visible().is_empty()>
                <p class="empty-note">"No recipes match."</p>
            </Show>

            <Pagination
                page=Signal::derive(move || view_state.get().page)
                total_pages=Signal::derive(move || derived.get().1)
                on_page=move |page| set_view_state.update(|s| s.set_page(page))
            />
        </div>
    }
}
