//! Recipe Form Component
//!
//! Shared form for the create and edit screens: per-field validation
//! messages, tag chips with popular suggestions, live ingredient count,
//! and an image preview that degrades to a placeholder glyph.

use leptos::prelude::*;

use potluck_core::{FieldErrors, RecipeDraft, RecipePayload, POPULAR_TAGS};

/// Form over a prefilled draft. `saving` disables the submit button while
/// a write is in flight; `on_submit` only fires with a valid payload.
#[component]
pub fn RecipeForm(
    initial: RecipeDraft,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<RecipePayload>,
) -> impl IntoView {
    let (title, set_title) = signal(initial.title.clone());
    let (ingredients_text, set_ingredients_text) = signal(initial.ingredients_text.clone());
    let (tags_text, set_tags_text) = signal(initial.tags_text.clone());
    let (image, set_image) = signal(initial.image.clone());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (preview_failed, set_preview_failed) = signal(false);

    let current_draft = move || RecipeDraft {
        title: title.get(),
        ingredients_text: ingredients_text.get(),
        tags_text: tags_text.get(),
        image: image.get(),
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match current_draft().validate() {
            Ok(payload) => {
                set_errors.set(FieldErrors::default());
                on_submit.run(payload);
            }
            Err(field_errors) => set_errors.set(field_errors),
        }
    };

    let ingredient_count = move || current_draft().ingredient_count();
    // Chips may repeat, so they are keyed by position
    let chips = move || {
        current_draft()
            .parsed_tags()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    let add_tag = move |tag: &str| {
        let mut draft = current_draft();
        draft.add_tag(tag);
        set_tags_text.set(draft.tags_text);
    };
    let remove_tag = move |tag: &str| {
        let mut draft = current_draft();
        draft.remove_tag(tag);
        set_tags_text.set(draft.tags_text);
    };

    view! {
        <form class="recipe-form" on:submit=submit>
            <div class="form-field">
                <label>"Title"</label>
                <input
                    type="text"
                    placeholder="What are you cooking?"
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        set_title.set(event_target_value(&ev));
                        // Editing a field clears its message
                        set_errors.update(|e| e.title = None);
                    }
                />
                {move || errors.get().title.map(|msg| view! {
                    <span class="field-error">{msg}</span>
                })}
            </div>

            <div class="form-field">
                <label>
                    "Ingredients, one per line "
                    <span class="ingredient-count">
                        {move || format!("({} so far)", ingredient_count())}
                    </span>
                </label>
                <textarea
                    rows=6
                    prop:value=move || ingredients_text.get()
                    on:input=move |ev| {
                        set_ingredients_text.set(event_target_value(&ev));
                        set_errors.update(|e| e.ingredients = None);
                    }
                ></textarea>
                {move || errors.get().ingredients.map(|msg| view! {
                    <span class="field-error">{msg}</span>
                })}
            </div>

            <div class="form-field">
                <label>"Tags, comma separated"</label>
                <input
                    type="text"
                    prop:value=move || tags_text.get()
                    on:input=move |ev| set_tags_text.set(event_target_value(&ev))
                />
                <div class="tag-chips">
                    <For
                        each=chips
                        key=|entry| entry.clone()
                        children=move |(_, tag)| {
                            let label = tag.clone();
                            view! {
                                <span class="tag-chip">
                                    {label}
                                    <button
                                        type="button"
                                        class="chip-remove"
                                        on:click=move |_| remove_tag(&tag)
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        }
                    />
                </div>
                <div class="popular-tags">
                    {POPULAR_TAGS.iter().map(|tag| view! {
                        <button
                            type="button"
                            class="popular-tag"
                            on:click=move |_| add_tag(tag)
                        >
                            {*tag}
                        </button>
                    }).collect_view()}
                </div>
            </div>

            <div class="form-field">
                <label>"Image URL (optional)"</label>
                <input
                    type="text"
                    prop:value=move || image.get()
                    on:input=move |ev| {
                        set_image.set(event_target_value(&ev));
                        set_preview_failed.set(false);
                    }
                />
                {move || {
                    let url = image.get().trim().to_string();
                    if url.is_empty() {
                        None
                    } else if preview_failed.get() {
                        Some(view! {
                            <div class="image-preview placeholder">"🍽"</div>
                        }.into_any())
                    } else {
                        Some(view! {
                            <img
                                class="image-preview"
                                src=url
                                on:error=move |_| set_preview_failed.set(true)
                            />
                        }.into_any())
                    }
                }}
            </div>

            <button type="submit" class="submit-btn" disabled=move || saving.get()>
                {move || if saving.get() { "Saving...".to_string() } else { submit_label.clone() }}
            </button>
        </form>
    }
}
