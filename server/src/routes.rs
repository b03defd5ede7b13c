//! API Routes
//!
//! The five CRUD handlers plus the health probe. Field presence is checked
//! here; everything else is delegated to the store and mapped back onto
//! the HTTP surface by `ApiError`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use potluck_core::{Recipe, RecipePayload, RecipeUpdate};

use crate::{error::ApiError, state::AppState, store::StoreError};

/// Body of a successful DELETE
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

pub async fn health_handler() -> &'static str {
    "Backend is running"
}

pub async fn list_recipes_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = state.store.list().await?;
    Ok(Json(recipes))
}

pub async fn get_recipe_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = state.store.get(&id).await?;
    Ok(Json(recipe))
}

pub async fn create_recipe_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RecipePayload>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    if payload.title.trim().is_empty() || payload.ingredients.is_empty() {
        return Err(ApiError::MissingFields);
    }
    let recipe = state.store.insert(payload).await?;
    info!("Created recipe {}", recipe.id);
    Ok((StatusCode::CREATED, Json(recipe)))
}

pub async fn update_recipe_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(changes): Json<RecipeUpdate>,
) -> Result<Json<Recipe>, ApiError> {
    if changes.is_empty() {
        return Err(ApiError::EmptyUpdate);
    }
    let recipe = state
        .store
        .update(&id, changes)
        .await
        .map_err(|err| match err {
            // 404 is reserved for single-record lookups; a vanished row on
            // update is a store-level failure
            StoreError::NotFound => ApiError::Store("Recipe not found".to_string()),
            err => ApiError::from(err),
        })?;
    info!("Updated recipe {id}");
    Ok(Json(recipe))
}

pub async fn delete_recipe_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.store.delete(&id).await?;
    info!("Deleted recipe {id}");
    Ok(Json(DeleteResponse {
        message: "Recipe deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::MemoryStore;

    fn test_state() -> Arc<AppState> {
        let config = Config {
            port: 0,
            store_url: "http://localhost:54321".to_string(),
            store_key: String::new(),
            cors_origin: "http://localhost:3000".to_string(),
        };
        AppState::new(config, Arc::new(MemoryStore::new()))
    }

    fn chili() -> RecipePayload {
        RecipePayload {
            title: "Chili".to_string(),
            ingredients: vec!["beans".to_string(), "tomatoes".to_string()],
            tags: Some(vec!["Spicy".to_string()]),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let state = test_state();

        let (status, Json(created)) =
            create_recipe_handler(State(state.clone()), Json(chili()))
                .await
                .expect("Create failed");
        assert_eq!(status, StatusCode::CREATED);
        assert!(!created.id.is_empty());
        assert!(created.created_at.is_some());

        let Json(found) = get_recipe_handler(State(state), Path(created.id.clone()))
            .await
            .expect("Get failed");
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let state = test_state();

        let no_title = RecipePayload {
            title: "   ".to_string(),
            ..chili()
        };
        let err = create_recipe_handler(State(state.clone()), Json(no_title))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingFields));

        let no_ingredients = RecipePayload {
            ingredients: Vec::new(),
            ..chili()
        };
        let err = create_recipe_handler(State(state.clone()), Json(no_ingredients))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingFields));

        // Nothing was persisted
        let Json(all) = list_recipes_handler(State(state)).await.expect("List failed");
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_everything() {
        let state = test_state();
        create_recipe_handler(State(state.clone()), Json(chili()))
            .await
            .expect("Create failed");
        create_recipe_handler(
            State(state.clone()),
            Json(RecipePayload {
                title: "Toast".to_string(),
                ingredients: vec!["bread".to_string()],
                tags: None,
                image: None,
            }),
        )
        .await
        .expect("Create failed");

        let Json(all) = list_recipes_handler(State(state)).await.expect("List failed");
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let state = test_state();
        let err = get_recipe_handler(State(state), Path("nope".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_update_touches_only_given_fields() {
        let state = test_state();
        let (_, Json(created)) = create_recipe_handler(State(state.clone()), Json(chili()))
            .await
            .expect("Create failed");

        let changes = RecipeUpdate {
            title: Some("Smoky Chili".to_string()),
            ..Default::default()
        };
        let Json(updated) =
            update_recipe_handler(State(state), Path(created.id.clone()), Json(changes))
                .await
                .expect("Update failed");

        assert_eq!(updated.title, "Smoky Chili");
        assert_eq!(updated.ingredients, created.ingredients);
        assert_eq!(updated.tags, created.tags);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_rejects_empty_payload() {
        let state = test_state();
        let (_, Json(created)) = create_recipe_handler(State(state.clone()), Json(chili()))
            .await
            .expect("Create failed");

        let err = update_recipe_handler(
            State(state),
            Path(created.id),
            Json(RecipeUpdate::default()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::EmptyUpdate));
    }

    #[tokio::test]
    async fn test_update_missing_recipe_is_store_failure() {
        let state = test_state();
        let changes = RecipeUpdate {
            title: Some("Ghost".to_string()),
            ..Default::default()
        };
        let err = update_recipe_handler(State(state), Path("nope".to_string()), Json(changes))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Store(msg) if msg == "Recipe not found"));
    }

    #[tokio::test]
    async fn test_delete_reports_and_is_idempotent() {
        let state = test_state();
        let (_, Json(created)) = create_recipe_handler(State(state.clone()), Json(chili()))
            .await
            .expect("Create failed");

        let Json(reply) = delete_recipe_handler(State(state.clone()), Path(created.id.clone()))
            .await
            .expect("Delete failed");
        assert_eq!(reply.message, "Recipe deleted successfully");

        let Json(all) = list_recipes_handler(State(state.clone()))
            .await
            .expect("List failed");
        assert!(all.is_empty());

        // Deleting an already-gone id still succeeds
        delete_recipe_handler(State(state), Path(created.id))
            .await
            .expect("Second delete failed");
    }

    #[tokio::test]
    async fn test_health_probe() {
        assert_eq!(health_handler().await, "Backend is running");
    }
}
