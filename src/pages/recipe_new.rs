//! New Recipe Screen
//!
//! Wraps the shared form with an empty draft and posts the payload on
//! submit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use potluck_core::{RecipeDraft, RecipePayload};

use crate::api;
use crate::components::{ErrorBanner, RecipeForm};
use crate::context::AppContext;
use crate::route::Route;

#[component]
pub fn RecipeNewPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = Callback::new(move |payload: RecipePayload| {
        if saving.get() {
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_recipe(&payload).await {
                Ok(created) => {
                    web_sys::console::log_1(&format!("[NewRecipe] Created {}", created.id).into());
                    ctx.navigate(Route::RecipeDetail(created.id));
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    });

    view! {
        <div class="form-page">
            <a class="back-link" on:click=move |_| ctx.navigate(Route::Recipes)>
                "← All recipes"
            </a>
            <h1>"Add a recipe"</h1>
            <ErrorBanner error=error set_error=set_error />
            <RecipeForm
                initial=RecipeDraft::default()
                saving=saving
                submit_label="Create recipe".to_string()
                on_submit=on_submit
            />
        </div>
    }
}
