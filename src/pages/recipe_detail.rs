//! Recipe Detail Screen
//!
//! Full record view with an edit link and a two-step delete. A missing
//! record renders an empty state with a back link instead of an error
//! banner.

use leptos::prelude::*;
use leptos::task::spawn_local;

use potluck_core::Recipe;

use crate::api;
use crate::components::{DeleteConfirmButton, ErrorBanner};
use crate::context::AppContext;
use crate::route::Route;

#[component]
pub fn RecipeDetailPage(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (recipe, set_recipe) = signal::<Option<Recipe>>(None);
    let (loading, set_loading) = signal(true);
    let (not_found, set_not_found) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (deleting, set_deleting) = signal(false);
    let (image_failed, set_image_failed) = signal(false);

    let fetch_id = id.clone();
    Effect::new(move |_| {
        let id = fetch_id.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api::get_recipe(&id).await {
                Ok(found) => set_recipe.set(Some(found)),
                Err(e) if e.is_not_found() => set_not_found.set(true),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Detail] Load failed: {e}").into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let delete_id = id.clone();
    let on_delete = Callback::new(move |_: ()| {
        if deleting.get() {
            return;
        }
        let id = delete_id.clone();
        set_deleting.set(true);
        spawn_local(async move {
            match api::delete_recipe(&id).await {
                Ok(reply) => {
                    web_sys::console::log_1(&format!("[Detail] {}", reply.message).into());
                    ctx.navigate(Route::Recipes);
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_deleting.set(false);
                }
            }
        });
    });

    view! {
        <div class="detail-page">
            <a class="back-link" on:click=move |_| ctx.navigate(Route::Recipes)>
                "← All recipes"
            </a>

            <ErrorBanner error=error set_error=set_error />

            <Show when=move || loading.get()>
                <div class="loading">"Loading recipe..."</div>
            </Show>

            <Show when=move || not_found.get()>
                <div class="not-found">
                    <p>"This recipe does not exist or was removed."</p>
                </div>
            </Show>

            {move || recipe.get().map(|recipe| {
                let title = recipe.title.clone();
                let alt = recipe.title.clone();
                let created = recipe.created_at.clone();
                let tags = recipe.tags.clone();
                let ingredients = recipe.ingredients.clone();
                let image = recipe.image.clone();
                let edit_id = recipe.id.clone();
                view! {
                    <article class="recipe-detail">
                        {match image.filter(|_| !image_failed.get()) {
                            Some(url) => view! {
                                <img
                                    class="detail-image"
                                    src=url
                                    alt=alt
                                    on:error=move |_| set_image_failed.set(true)
                                />
                            }
                            .into_any(),
                            None => view! { <div class="detail-placeholder">"🍽"</div> }.into_any(),
                        }}
                        <h1>{title}</h1>
                        {created.map(|ts| view! { <p class="detail-meta">"Added " {ts}</p> })}
                        <div class="detail-tags">
                            {tags.iter().map(|tag| view! {
                                <span class="tag-chip">{tag.clone()}</span>
                            }).collect_view()}
                        </div>
                        <h2>"Ingredients"</h2>
                        <ul class="ingredient-list">
                            {ingredients.iter().map(|line| view! {
                                <li>{line.clone()}</li>
                            }).collect_view()}
                        </ul>
                        <div class="detail-actions">
                            <button
                                class="edit-btn"
                                on:click=move |_| ctx.navigate(Route::RecipeEdit(edit_id.clone()))
                            >
                                "Edit"
                            </button>
                            <DeleteConfirmButton disabled=deleting on_confirm=on_delete />
                        </div>
                    </article>
                }
            })}
        </div>
    }
}
