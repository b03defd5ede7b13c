//! Tag Filter Component
//!
//! Dropdown over the tag universe of the loaded records; the empty value
//! clears the filter.

use leptos::prelude::*;

#[component]
pub fn TagFilter(
    #[prop(into)] tags: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <select
            class="tag-filter"
            prop:value=move || selected.get().unwrap_or_default()
            on:change=move |ev| {
                let value = event_target_value(&ev);
                on_select.run(if value.is_empty() { None } else { Some(value) });
            }
        >
            <option value="">"All tags"</option>
            <For
                each=move || tags.get()
                key=|tag| tag.clone()
                children=move |tag| {
                    let label = tag.clone();
                    view! { <option value=tag>{label}</option> }
                }
            />
        </select>
    }
}
