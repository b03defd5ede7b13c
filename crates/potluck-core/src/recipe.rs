//! Recipe Models
//!
//! Wire shapes shared by the web UI and the API server. Field names match
//! the hosted store's `recipes` table columns.

use serde::{Deserialize, Serialize};

/// A persisted recipe as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Write-side shape for creating a recipe; the store assigns id and
/// timestamps. Defaults let the server report missing fields itself
/// instead of failing at decode time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipePayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Partial write shape for updates. Absent fields are skipped on the wire
/// so the store leaves those columns untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl RecipeUpdate {
    /// True when no field is present (an invalid update request)
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.ingredients.is_none()
            && self.tags.is_none()
            && self.image.is_none()
    }
}

impl From<RecipePayload> for RecipeUpdate {
    fn from(payload: RecipePayload) -> Self {
        Self {
            title: Some(payload.title),
            ingredients: Some(payload.ingredients),
            tags: payload.tags,
            image: payload.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_deserializes_minimal_row() {
        let json = r#"{"id":"r1","title":"Toast","ingredients":["bread"]}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, "r1");
        assert!(recipe.tags.is_empty());
        assert!(recipe.image.is_none());
        assert!(recipe.created_at.is_none());
    }

    #[test]
    fn test_recipe_deserializes_full_row() {
        let json = r#"{
            "id": "r2",
            "title": "Chili",
            "ingredients": ["beans", "tomatoes"],
            "tags": ["Spicy", "Vegan"],
            "image": "https://example.com/chili.jpg",
            "created_at": "2024-01-15T10:30:00+00:00",
            "updated_at": "2024-02-01T08:00:00+00:00"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.tags, vec!["Spicy", "Vegan"]);
        assert_eq!(recipe.image.as_deref(), Some("https://example.com/chili.jpg"));
    }

    #[test]
    fn test_payload_decode_tolerates_missing_fields() {
        // Validation happens in the handler, not at decode time
        let payload: RecipePayload = serde_json::from_str(r#"{"title":"Soup"}"#).unwrap();
        assert_eq!(payload.title, "Soup");
        assert!(payload.ingredients.is_empty());
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let update = RecipeUpdate {
            title: Some("New title".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"title":"New title"}"#);
    }

    #[test]
    fn test_update_is_empty() {
        assert!(RecipeUpdate::default().is_empty());
        let update = RecipeUpdate {
            image: Some(String::new()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
