//! Recipe Form Controller
//!
//! Raw form text in, validated write payload or field errors out. The
//! split rules match what the store expects: one ingredient per line,
//! tags as a comma list.

use crate::recipe::{Recipe, RecipePayload};

/// One-click tag suggestions offered under the tags input
pub const POPULAR_TAGS: [&str; 8] = [
    "Vegan",
    "Quick",
    "Easy",
    "Healthy",
    "Dessert",
    "Spicy",
    "Vegetarian",
    "Gluten-free",
];

/// Raw text state of the recipe form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients_text: String,
    pub tags_text: String,
    pub image: String,
}

/// Field -> message mapping; submission is blocked while any entry is set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub ingredients: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.ingredients.is_none()
    }
}

/// One ingredient per line; lines are trimmed, blank lines dropped
pub fn split_ingredients(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma-separated tags; entries trimmed, empties dropped, duplicates kept
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

impl RecipeDraft {
    /// Prefill from an existing record for the edit screen
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            ingredients_text: recipe.ingredients.join("\n"),
            tags_text: recipe.tags.join(", "),
            image: recipe.image.clone().unwrap_or_default(),
        }
    }

    /// Current tag chips as the user would see them
    pub fn parsed_tags(&self) -> Vec<String> {
        split_tags(&self.tags_text)
    }

    /// Live count shown next to the ingredients textarea
    pub fn ingredient_count(&self) -> usize {
        split_ingredients(&self.ingredients_text).len()
    }

    /// Append a tag unless it is already present
    pub fn add_tag(&mut self, tag: &str) {
        let mut tags = self.parsed_tags();
        if tags.iter().any(|t| t == tag) {
            return;
        }
        tags.push(tag.to_string());
        self.tags_text = tags.join(", ");
    }

    /// Drop every occurrence of a tag
    pub fn remove_tag(&mut self, tag: &str) {
        let tags: Vec<String> = self
            .parsed_tags()
            .into_iter()
            .filter(|t| t != tag)
            .collect();
        self.tags_text = tags.join(", ");
    }

    /// Validate synchronously and build the write payload.
    ///
    /// Title must be non-empty after trimming and at least one ingredient
    /// line must survive the split; otherwise the per-field messages come
    /// back and nothing should be sent.
    pub fn validate(&self) -> Result<RecipePayload, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.title = Some("Title is required".to_string());
        }

        let ingredients = split_ingredients(&self.ingredients_text);
        if ingredients.is_empty() {
            errors.ingredients = Some("At least one ingredient is required".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let tags = split_tags(&self.tags_text);
        let image = self.image.trim();
        Ok(RecipePayload {
            title: title.to_string(),
            ingredients,
            tags: if tags.is_empty() { None } else { Some(tags) },
            image: if image.is_empty() {
                None
            } else {
                Some(image.to_string())
            },
        })
    }
}
