use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One line of a user's server-side cart.
///
/// The backend keeps at most one entry per product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// A cart entry joined with its catalog product, ready for display.
///
/// Built fresh by [`reconcile`](crate::cart::reconcile) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineItem {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub cost: f64,
    pub rating: u8,
    #[serde(rename = "image")]
    pub image_url: String,
    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            cost: product.cost,
            rating: product.rating,
            image_url: product.image_url.clone(),
            quantity,
        }
    }

    /// Cost of this line (`cost × quantity`).
    pub fn value(&self) -> f64 {
        self.cost * f64::from(self.quantity)
    }
}
