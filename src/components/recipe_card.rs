//! Recipe Card Component
//!
//! Card shown in the home and management lists. A broken image URL swaps
//! to a placeholder glyph instead of the browser's broken-image icon.

use leptos::prelude::*;

use potluck_core::Recipe;

#[component]
pub fn RecipeCard(
    recipe: Recipe,
    #[prop(into)] on_open: Callback<String>,
) -> impl IntoView {
    let (image_failed, set_image_failed) = signal(false);

    let id = recipe.id.clone();
    let title = recipe.title.clone();
    let alt = recipe.title.clone();
    let tags = recipe.tags.clone();
    let ingredient_count = recipe.ingredients.len();
    let image = recipe.image.clone();

    view! {
        <div class="recipe-card" on:click=move |_| on_open.run(id.clone())>
            {move || match image.clone().filter(|_| !image_failed.get()) {
                Some(url) => view! {
                    <img
                        class="recipe-card-image"
                        src=url
                        alt=alt.clone()
                        on:error=move |_| set_image_failed.set(true)
                    />
                }
                .into_any(),
                None => view! { <div class="recipe-card-placeholder">"🍽"</div> }.into_any(),
            }}
            <div class="recipe-card-body">
                <h3 class="recipe-card-title">{title}</h3>
                <div class="recipe-card-tags">
                    {tags.iter().map(|tag| view! {
                        <span class="tag-chip">{tag.clone()}</span>
                    }).collect_view()}
                </div>
                <span class="recipe-card-meta">
                    {format!("{} ingredient{}", ingredient_count, if ingredient_count == 1 { "" } else { "s" })}
                </span>
            </div>
        </div>
    }
}
