//! Edit Recipe Screen
//!
//! Loads the record, prefills the shared form from it, and sends the
//! whole payload back as an update on submit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use potluck_core::{RecipeDraft, RecipePayload, RecipeUpdate};

use crate::api;
use crate::components::{ErrorBanner, RecipeForm};
use crate::context::AppContext;
use crate::route::Route;

#[component]
pub fn RecipeEditPage(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (draft, set_draft) = signal::<Option<RecipeDraft>>(None);
    let (loading, set_loading) = signal(true);
    let (not_found, set_not_found) = signal(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch_id = id.clone();
    Effect::new(move |_| {
        let id = fetch_id.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api::get_recipe(&id).await {
                Ok(found) => set_draft.set(Some(RecipeDraft::from_recipe(&found))),
                Err(e) if e.is_not_found() => set_not_found.set(true),
                Err(e) => {
                    web_sys::console::error_1(&format!("[EditRecipe] Load failed: {e}").into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let submit_id = id.clone();
    let on_submit = Callback::new(move |payload: RecipePayload| {
        if saving.get() {
            return;
        }
        let id = submit_id.clone();
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::update_recipe(&id, &RecipeUpdate::from(payload)).await {
                Ok(updated) => {
                    web_sys::console::log_1(&format!("[EditRecipe] Saved {}", updated.id).into());
                    ctx.navigate(Route::RecipeDetail(updated.id));
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
            <h1>"Edit recipe"</h1>
            <ErrorBanner error=error set_error=set_error />

            <Show when=move || loading.get()>
                <div class="loading">"Loading recipe..."</div>
            </Show>

            <Show when=move || not_found.get()>
                <div class="not-found">
                    <p>"This recipe does not exist or was removed."</p>
                </div>
            </Show>

            {move || draft.get().map(|initial| view! {
                <RecipeForm
                    initial=initial
                    saving=saving
                    submit_label="Save changes".to_string()
                    on_submit=on_submit
                />
            })}
        </div>
    }
}
