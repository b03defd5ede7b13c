//! Hash Routing
//!
//! Screen selection as plain state: a `Route` value held in a signal and
//! round-tripped through the URL hash so deep links and the back button
//! work.

/// Routed screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Recipes,
    RecipeNew,
    RecipeDetail(String),
    RecipeEdit(String),
}

impl Route {
    /// Management screens need an active session
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Recipes | Route::RecipeNew | Route::RecipeDetail(_) | Route::RecipeEdit(_)
        )
    }

    /// Hash fragment for this route, leading `#` included
    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Login => "#/login".to_string(),
            Route::Register => "#/register".to_string(),
            Route::Recipes => "#/recipes".to_string(),
            Route::RecipeNew => "#/recipes/new".to_string(),
            Route::RecipeDetail(id) => format!("#/recipes/{id}"),
            Route::RecipeEdit(id) => format!("#/recipes/{id}/edit"),
        }
    }

    /// Parse a location hash; anything unrecognized lands on Home
    pub fn from_hash(hash: &str) -> Route {
        let path = hash.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["recipes"] => Route::Recipes,
            ["recipes", "new"] => Route::RecipeNew,
            ["recipes", id] => Route::RecipeDetail((*id).to_string()),
            ["recipes", id, "edit"] => Route::RecipeEdit((*id).to_string()),
            _ => Route::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_round_trip_through_the_hash() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::Recipes,
            Route::RecipeNew,
            Route::RecipeDetail("abc-123".to_string()),
            Route::RecipeEdit("abc-123".to_string()),
        ];
        for route in routes {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_new_segment_is_not_an_id() {
        assert_eq!(Route::from_hash("#/recipes/new"), Route::RecipeNew);
        assert_eq!(
            Route::from_hash("#/recipes/77"),
            Route::RecipeDetail("77".to_string())
        );
    }

    #[test]
    fn test_unknown_hashes_land_on_home() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/nowhere"), Route::Home);
        assert_eq!(Route::from_hash("#/recipes/1/edit/extra"), Route::Home);
    }

    #[test]
    fn test_management_screens_require_a_session() {
        assert!(Route::Recipes.requires_session());
        assert!(Route::RecipeNew.requires_session());
        assert!(Route::RecipeDetail("x".to_string()).requires_session());
        assert!(Route::RecipeEdit("x".to_string()).requires_session());
        assert!(!Route::Home.requires_session());
        assert!(!Route::Login.requires_session());
        assert!(!Route::Register.requires_session());
    }
}
