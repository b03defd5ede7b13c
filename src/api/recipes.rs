//! Recipe API Bindings
//!
//! One async function per endpoint of the recipe API.

use serde::Deserialize;

use potluck_core::{Recipe, RecipePayload, RecipeUpdate};

use super::{api_base, client, decode_json, send, ApiError};

/// Body of a successful DELETE
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteReply {
    pub message: String,
}

pub async fn list_recipes() -> Result<Vec<Recipe>, ApiError> {
    let request = client().get(format!("{}/recipes", api_base()));
    decode_json(send(request).await?).await
}

pub async fn get_recipe(id: &str) -> Result<Recipe, ApiError> {
    let request = client().get(format!("{}/recipes/{id}", api_base()));
    decode_json(send(request).await?).await
}

pub async fn create_recipe(payload: &RecipePayload) -> Result<Recipe, ApiError> {
    let request = client()
        .post(format!("{}/recipes", api_base()))
        .json(payload);
    decode_json(send(request).await?).await
}

pub async fn update_recipe(id: &str, changes: &RecipeUpdate) -> Result<Recipe, ApiError> {
    let request = client()
        .put(format!("{}/recipes/{id}", api_base()))
        .json(changes);
    decode_json(send(request).await?).await
}

pub async fn delete_recipe(id: &str) -> Result<DeleteReply, ApiError> {
    let request = client().delete(format!("{}/recipes/{id}", api_base()));
    decode_json(send(request).await?).await
}
