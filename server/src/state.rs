use std::sync::Arc;

use crate::{config::Config, store::RecipeStore};

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn RecipeStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn RecipeStore>) -> Arc<Self> {
        Arc::new(Self { config, store })
    }
}
