//! Pagination Component
//!
//! Prev/next plus numbered page buttons; renders nothing while there is
//! at most one page.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || total_pages.get() > 1>
            <div class="pagination">
                <button
                    class="page-btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| on_page.run(page.get().saturating_sub(1).max(1))
                >
                    "‹ Prev"
                </button>
                <For
                    each=move || 1..=total_pages.get()
                    key=|n| *n
                    children=move |n| {
                        view! {
                            <button
                                class=move || {
                                    if page.get() == n { "page-btn active" } else { "page-btn" }
                                }
                                on:click=move |_| on_page.run(n)
                            >
                                {n}
                            </button>
                        }
                    }
                />
                <button
                    class="page-btn"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| on_page.run(page.get() + 1)
                >
                    "Next ›"
                </button>
            </div>
        </Show>
    }
}
