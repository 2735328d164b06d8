use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Response body of the recipes endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecipeResponse {
    pub recipes: Vec<Recipe>,
}

/// A single catalog entry.
///
/// Fields are read-only once decoded. `id` is generated locally for every
/// instance and never travels over the wire; `uuid` is the backend's key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recipe {
    #[serde(skip, default = "Uuid::new_v4")]
    id: Uuid,
    cuisine: String,
    name: String,
    photo_url_large: Option<Url>,
    photo_url_small: Option<Url>,
    source_url: Option<Url>,
    uuid: String,
    youtube_url: Option<Url>,
}

/// Compares content only; the local `id` is ignored.
impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
            && self.name == other.name
            && self.cuisine == other.cuisine
            && self.photo_url_large == other.photo_url_large
            && self.photo_url_small == other.photo_url_small
            && self.source_url == other.source_url
            && self.youtube_url == other.youtube_url
    }
}

impl Eq for Recipe {}

impl Recipe {
    /// Create a recipe without any media links.
    pub fn new(
        uuid: impl Into<String>,
        name: impl Into<String>,
        cuisine: impl Into<String>,
    ) -> Self {
        Recipe {
            id: Uuid::new_v4(),
            cuisine: cuisine.into(),
            name: name.into(),
            photo_url_large: None,
            photo_url_small: None,
            source_url: None,
            uuid: uuid.into(),
            youtube_url: None,
        }
    }

    pub fn with_photos(mut self, large: Option<Url>, small: Option<Url>) -> Self {
        self.photo_url_large = large;
        self.photo_url_small = small;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    pub fn photo_url_large(&self) -> Option<&Url> {
        self.photo_url_large.as_ref()
    }

    pub fn photo_url_small(&self) -> Option<&Url> {
        self.photo_url_small.as_ref()
    }

    pub fn source_url(&self) -> Option<&Url> {
        self.source_url.as_ref()
    }

    pub fn youtube_url(&self) -> Option<&Url> {
        self.youtube_url.as_ref()
    }

    /// Large photo if present, otherwise the small one.
    pub fn preferred_photo(&self) -> Option<&Url> {
        self.photo_url_large().or_else(|| self.photo_url_small())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APAM_BALIK: &str = r#"{
        "cuisine": "Malaysian",
        "name": "Apam Balik",
        "photo_url_large": "https://d3jbb8n5wk0qxi.cloudfront.net/photos/b9ab0071-b281-4bee-b361-ec340d405320/large.jpg",
        "photo_url_small": "https://d3jbb8n5wk0qxi.cloudfront.net/photos/b9ab0071-b281-4bee-b361-ec340d405320/small.jpg",
        "source_url": "https://www.nyonyacooking.com/recipes/apam-balik~SJ5WuvsDf9WQ",
        "uuid": "0c6ca6e7-e32a-4053-b824-1dbf749910d8",
        "youtube_url": "https://www.youtube.com/watch?v=6R8ffRRJcrg"
    }"#;

    #[test]
    fn test_decode_all_fields() {
        let recipe: Recipe = serde_json::from_str(APAM_BALIK).unwrap();

        assert_eq!(recipe.cuisine(), "Malaysian");
        assert_eq!(recipe.name(), "Apam Balik");
        assert_eq!(
            recipe.photo_url_large().map(Url::as_str),
            Some("https://d3jbb8n5wk0qxi.cloudfront.net/photos/b9ab0071-b281-4bee-b361-ec340d405320/large.jpg")
        );
        assert_eq!(
            recipe.photo_url_small().map(Url::as_str),
            Some("https://d3jbb8n5wk0qxi.cloudfront.net/photos/b9ab0071-b281-4bee-b361-ec340d405320/small.jpg")
        );
        assert_eq!(
            recipe.source_url().map(Url::as_str),
            Some("https://www.nyonyacooking.com/recipes/apam-balik~SJ5WuvsDf9WQ")
        );
        assert_eq!(recipe.uuid(), "0c6ca6e7-e32a-4053-b824-1dbf749910d8");
        assert_eq!(
            recipe.youtube_url().map(Url::as_str),
            Some("https://www.youtube.com/watch?v=6R8ffRRJcrg")
        );
    }

    #[test]
    fn test_decode_null_and_missing_optionals() {
        let json = r#"{
            "cuisine": "British",
            "name": "Apple & Blackberry Crumble",
            "photo_url_large": "https://d3jbb8n5wk0qxi.cloudfront.net/photos/535dfe4e-5d61-4db6-ba8f-7a27b1214f5d/large.jpg",
            "uuid": "599344f4-3c5c-4cca-b914-2210e3b3312f",
            "youtube_url": null
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe.name(), "Apple & Blackberry Crumble");
        assert_eq!(recipe.cuisine(), "British");
        assert!(recipe.photo_url_large().is_some());
        assert!(recipe.photo_url_small().is_none());
        assert!(recipe.source_url().is_none());
        assert!(recipe.youtube_url().is_none());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"{"cuisine": "British", "name": "Apple & Blackberry Crumble"}"#;
        let err = serde_json::from_str::<Recipe>(json).unwrap_err();
        assert!(err.to_string().contains("uuid"));
    }

    #[test]
    fn test_wrong_type_fails() {
        let json = r#"{"cuisine": "British", "name": 42, "uuid": "x"}"#;
        assert!(serde_json::from_str::<Recipe>(json).is_err());
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let json = r#"{"cuisine": "British", "name": "Crumble", "uuid": "x", "source_url": "/recipes/1"}"#;
        assert!(serde_json::from_str::<Recipe>(json).is_err());
    }

    #[test]
    fn test_local_ids_are_unique_per_instance() {
        let a: Recipe = serde_json::from_str(APAM_BALIK).unwrap();
        let b: Recipe = serde_json::from_str(APAM_BALIK).unwrap();
        assert_eq!(a.uuid(), b.uuid());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_equality_ignores_local_id() {
        let a: Recipe = serde_json::from_str(APAM_BALIK).unwrap();
        let b: Recipe = serde_json::from_str(APAM_BALIK).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);

        let other = Recipe::new(a.uuid(), "Apam Balik Manis", a.cuisine());
        assert_ne!(a, other);
    }

    #[test]
    fn test_id_is_not_serialized() {
        let recipe: Recipe = serde_json::from_str(APAM_BALIK).unwrap();
        let value = serde_json::to_value(&recipe).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(
            value["photo_url_small"],
            serde_json::json!(recipe.photo_url_small().unwrap().as_str())
        );
    }

    #[test]
    fn test_preferred_photo_falls_back_to_small() {
        let small = Url::parse("https://example.com/small.jpg").unwrap();
        let recipe =
            Recipe::new("1", "Bakewell Tart", "British").with_photos(None, Some(small.clone()));
        assert_eq!(recipe.preferred_photo(), Some(&small));

        let bare = Recipe::new("2", "Banana Pancakes", "American");
        assert!(bare.preferred_photo().is_none());
    }

    #[test]
    fn test_decode_response_envelope() {
        let json = format!(r#"{{"recipes": [{}]}}"#, APAM_BALIK);
        let response: RecipeResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.recipes.len(), 1);

        let empty: RecipeResponse = serde_json::from_str(r#"{"recipes": []}"#).unwrap();
        assert!(empty.recipes.is_empty());
    }
}
