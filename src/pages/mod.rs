//! Screens
//!
//! One module per routed screen.

mod home;
mod login;
mod recipe_detail;
mod recipe_edit;
mod recipe_list;
mod recipe_new;
mod register;

pub use home::HomePage;
pub use login::LoginPage;
pub use recipe_detail::RecipeDetailPage;
pub use recipe_edit::RecipeEditPage;
pub use recipe_list::RecipeListPage;
pub use recipe_new::RecipeNewPage;
pub use register::RegisterPage;
