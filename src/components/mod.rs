//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod error_banner;
mod nav_bar;
mod pagination;
mod recipe_card;
mod recipe_form;
mod tag_filter;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use nav_bar::NavBar;
pub use pagination::Pagination;
pub use recipe_card::RecipeCard;
pub use recipe_form::RecipeForm;
pub use tag_filter::TagFilter;
