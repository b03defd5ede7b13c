//! Shared Recipe Logic
//!
//! Pure logic used by both the web UI and the API server:
//! - `recipe`: wire shapes for records and write payloads
//! - `pipeline`: search/tag-filter/sort/paginate derivation for list views
//! - `form`: raw form text -> validated payload
//! - `auth`: session wire shapes and registration checks
//!
//! Nothing in this crate performs I/O or touches a rendering environment.

pub mod auth;
pub mod form;
pub mod pipeline;
pub mod recipe;

pub use auth::{PasswordStrength, Session, User};
pub use form::{FieldErrors, RecipeDraft, POPULAR_TAGS};
pub use pipeline::{ListViewState, SortMode, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use recipe::{Recipe, RecipePayload, RecipeUpdate};
