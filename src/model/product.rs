/// Represents a product in the storefront catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing the in-memory backend to manage it with a
/// [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductDraft`])
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// The backend hands out opaque strings (e.g. `"KCRwjF7lN97HnEaY"`); the in-memory backend
/// generates `product_<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Highest rating a product can carry.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub cost: f64,
    pub rating: u8,
    #[serde(rename = "image")]
    pub image_url: String,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - Product name
    /// * `category` - Category shown under the name
    /// * `cost` - Unit price
    /// * `rating` - Aggregate rating out of [`MAX_RATING`]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        cost: f64,
        rating: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            cost,
            rating,
            image_url: String::new(),
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Case-insensitive match against name or category.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.name.to_lowercase().contains(&query) || self.category.to_lowercase().contains(&query)
    }
}

/// Payload for adding a product to the in-memory catalog.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub cost: f64,
    pub rating: u8,
    pub image_url: String,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>, cost: f64, rating: u8) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            cost,
            rating,
            image_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_uses_backend_field_names() {
        let json = r#"{
            "_id": "BW0jAAeDJmlZCF8i",
            "name": "Tan Leatherette Weekender Duffle",
            "category": "Fashion",
            "cost": 150,
            "rating": 4,
            "image": "https://crio-directus-assets.s3.ap-south-1.amazonaws.com/ff071a1c-1099-48f9-9b03-f858ccc53832.png"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::from("BW0jAAeDJmlZCF8i"));
        assert_eq!(product.cost, 150.0);
        assert_eq!(product.rating, 4);
        assert!(product.image_url.ends_with(".png"));
    }

    #[test]
    fn test_matches_name_or_category_ignoring_case() {
        let product = Product::new("p1", "YONEX Smash Badminton Racquet", "Sports", 100.0, 5);
        assert!(product.matches("racquet"));
        assert!(product.matches("SPORTS"));
        assert!(!product.matches("fashion"));
    }
}
