//! Recipe Store
//!
//! `RecipeStore` abstracts the hosted row API so handlers can run against
//! an in-memory double in tests. `HostedStore` speaks the hosted service's
//! REST dialect: column filters in the query string and
//! `Prefer: return=representation` to get written rows back.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use potluck_core::{Recipe, RecipePayload, RecipeUpdate};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Recipe not found")]
    NotFound,

    #[error("{0}")]
    Unavailable(String),
}

/// CRUD surface the handlers depend on
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// All recipes in store order
    async fn list(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Single recipe by id
    async fn get(&self, id: &str) -> Result<Recipe, StoreError>;

    /// Persist a new recipe; the store assigns id and created-at
    async fn insert(&self, payload: RecipePayload) -> Result<Recipe, StoreError>;

    /// Apply the provided fields to an existing recipe
    async fn update(&self, id: &str, changes: RecipeUpdate) -> Result<Recipe, StoreError>;

    /// Remove by id; removing an absent id is not an error
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Client for the hosted store's row API
pub struct HostedStore {
    http: reqwest::Client,
    recipes_url: String,
    api_key: String,
}

impl HostedStore {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            recipes_url: format!("{}/rest/v1/recipes", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        })
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

fn request_error(err: reqwest::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

// Non-2xx answers become Unavailable with whatever the store said.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!("Store rejected request: {status} {body}");
    Err(StoreError::Unavailable(format!(
        "store responded {status}: {body}"
    )))
}

#[async_trait]
impl RecipeStore for HostedStore {
    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        let response = self
            .authed(self.http.get(&self.recipes_url))
            .query(&[("select", "*")])
            .send()
            .await
            .map_err(request_error)?;
        check_status(response)
            .await?
            .json::<Vec<Recipe>>()
            .await
            .map_err(request_error)
    }

    async fn get(&self, id: &str) -> Result<Recipe, StoreError> {
        let response = self
            .authed(self.http.get(&self.recipes_url))
            .query(&[("id", format!("eq.{id}")), ("select", "*".to_string())])
            .send()
            .await
            .map_err(request_error)?;
        let rows: Vec<Recipe> = check_status(response)
            .await?
            .json()
            .await
            .map_err(request_error)?;
        rows.into_iter().next().ok_or(StoreError::NotFound)
    }

    async fn insert(&self, payload: RecipePayload) -> Result<Recipe, StoreError> {
        let response = self
            .authed(self.http.post(&self.recipes_url))
            .header("Prefer", "return=representation")
            .json(&[payload])
            .send()
            .await
            .map_err(request_error)?;
        let rows: Vec<Recipe> = check_status(response)
            .await?
            .json()
            .await
            .map_err(request_error)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Unavailable("store returned no row for insert".to_string()))
    }

    async fn update(&self, id: &str, changes: RecipeUpdate) -> Result<Recipe, StoreError> {
        let response = self
            .authed(self.http.patch(&self.recipes_url))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&changes)
            .send()
            .await
            .map_err(request_error)?;
        let rows: Vec<Recipe> = check_status(response)
            .await?
            .json()
            .await
            .map_err(request_error)?;
        rows.into_iter().next().ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .authed(self.http.delete(&self.recipes_url))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(request_error)?;
        check_status(response).await?;
        Ok(())
    }
}

/// In-memory double used by the handler tests
#[cfg(test)]
pub struct MemoryStore {
    rows: std::sync::Mutex<Vec<Recipe>>,
    next_id: std::sync::atomic::AtomicU32,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: std::sync::Mutex::new(Vec::new()),
            next_id: std::sync::atomic::AtomicU32::new(1),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl RecipeStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> Result<Recipe, StoreError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, payload: RecipePayload) -> Result<Recipe, StoreError> {
        let id = self
            .next_id
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let recipe = Recipe {
            id: format!("r{id}"),
            title: payload.title,
            ingredients: payload.ingredients,
            tags: payload.tags.unwrap_or_default(),
            image: payload.image,
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            updated_at: None,
        };
        self.rows.lock().unwrap().push(recipe.clone());
        Ok(recipe)
    }

    async fn update(&self, id: &str, changes: RecipeUpdate) -> Result<Recipe, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound)?;
        if let Some(title) = changes.title {
            row.title = title;
        }
        if let Some(ingredients) = changes.ingredients {
            row.ingredients = ingredients;
        }
        if let Some(tags) = changes.tags {
            row.tags = tags;
        }
        if let Some(image) = changes.image {
            row.image = Some(image);
        }
        row.updated_at = Some(chrono::Utc::now().to_rfc3339());
        Ok(row.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}
