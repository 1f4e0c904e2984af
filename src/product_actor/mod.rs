//! # Product Actor
//!
//! Holds the in-memory catalog. Products are created from a [`ProductDraft`], listed in
//! creation order, and looked up by id; they have no actions of their own.
//!
//! ## Usage
//!
//! ```rust
//! use qkart::clients::ActorClient;
//! use qkart::model::ProductDraft;
//! use qkart::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new();
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductDraft::new("Pen", "Stationery", 10.0, 4))
//!         .await?;
//!     assert_eq!(client.list().await?.len(), 1);
//!     assert!(client.get(id).await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, ProductClient::new(generic_client))
}
