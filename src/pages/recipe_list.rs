//! Recipe Management Screen
//!
//! Signed-in list with the full control set: search, tag filter, sort,
//! grid/list toggle, page size, pagination.

use leptos::prelude::*;
use leptos::task::spawn_local;

use potluck_core::{pipeline, ListViewState, Recipe, SortMode, PAGE_SIZE_OPTIONS};

use crate::api;
use crate::components::{ErrorBanner, Pagination, RecipeCard, TagFilter};
use crate::context::AppContext;
use crate::route::Route;

/// Layout of the result list
#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Grid,
    List,
}

#[component]
pub fn RecipeListPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (recipes, set_recipes) = signal(Vec::<Recipe>::new());
    let (view_state, set_view_state) = signal(ListViewState::default());
    let (view_mode, set_view_mode) = signal(ViewMode::Grid);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        set_loading.set(true);
        spawn_local(async move {
            match api::list_recipes().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[Recipes] Loaded {} recipes", loaded.len()).into(),
                    );
                    set_recipes.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Recipes] Load failed: {e}").into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let derived = Memo::new(move |_| pipeline::derive(&recipes.get(), &view_state.get()));
    let visible = move || derived.get().0;
    let tags = Signal::derive(move || pipeline::tag_universe(&recipes.get()));

    let open_recipe = move |id: String| ctx.navigate(Route::RecipeDetail(id));

    view! {
        <div class="recipes-page">
            <div class="page-header">
                <h1>"My recipes"</h1>
                <button class="new-btn" on:click=move |_| ctx.navigate(Route::RecipeNew)>
                    "New recipe"
                </button>
            </div>

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
                <select
                    class="page-size-select"
                    prop:value=move || view_state.get().page_size.to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            set_view_state.update(|s| s.set_page_size(size));
                        }
                    }
                >
                    {PAGE_SIZE_OPTIONS.iter().map(|size| view! {
                        <option value=size.to_string()>{format!("{size} per page")}</option>
                    }).collect_view()}
                </select>
                <div class="view-toggle">
                    <button
                        class=move || {
                            if view_mode.get() == ViewMode::Grid { "toggle-btn active" } else { "toggle-btn" }
                        }
                        on:click=move |_| set_view_mode.set(ViewMode::Grid)
                    >
                        "Grid"
                    </button>
                    <button
                        class=move || {
                            if view_mode.get() == ViewMode::List { "toggle-btn active" } else { "toggle-btn" }
                        }
                        on:click=move |_| set_view_mode.set(ViewMode::List)
                    >
                        "List"
                    </button>
                </div>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Loading recipes..."</div>
            </Show>

            <div class=move || {
                match view_mode.get() {
                    ViewMode::Grid => "recipe-grid",
                    ViewMode::List => "recipe-rows",
                }
            }>
                <For
                    each=visible
                    key=|recipe| recipe.id.clone()
                    children=move |recipe| {
                        view! { <RecipeCard recipe=recipe on_open=open_recipe /> }
                    }
                />
            </div>

            <Show when=move || !loading.get() && visible().is_empty()>
                <p class="empty-note">"Nothing here yet. Add your first recipe!"</p>
            </Show>

            <Pagination
                page=Signal::derive(move || view_state.get().page)
                total_pages=Signal::derive(move || derived.get().1)
                on_page=move |page| set_view_state.update(|s| s.set_page(page))
            />
        </div>
    }
}
