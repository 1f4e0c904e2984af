//! [`ActorEntity`] implementation for the catalog [`Product`].

use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductDraft, ProductId, MAX_RATING};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductDraft;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn assign_id(sequence: u32, _params: &ProductDraft) -> ProductId {
        ProductId(format!("product_{}", sequence))
    }

    /// Validates the draft.
    ///
    /// # Errors
    /// - empty name
    /// - negative or non-finite cost
    /// - rating above [`MAX_RATING`]
    fn from_create_params(id: ProductId, draft: ProductDraft) -> Result<Self, ProductError> {
        if draft.name.trim().is_empty() {
            return Err(ProductError::InvalidDraft("name must not be empty".into()));
        }
        if !draft.cost.is_finite() || draft.cost < 0.0 {
            return Err(ProductError::InvalidDraft(format!("cost {} is not a price", draft.cost)));
        }
        if draft.rating > MAX_RATING {
            return Err(ProductError::InvalidDraft(format!(
                "rating {} exceeds {}",
                draft.rating, MAX_RATING
            )));
        }
        Ok(Product::new(id, draft.name, draft.category, draft.cost, draft.rating).with_image(draft.image_url))
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), ProductError> {
        match action {}
    }
}
