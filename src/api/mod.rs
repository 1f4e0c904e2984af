//! # Storefront API
//!
//! [`StorefrontApi`] is the seam between the storefront and its backend: one method per
//! REST endpoint, typed in the crate's model. [`HttpStorefront`] speaks to a real server;
//! [`MemoryStorefront`](crate::lifecycle::MemoryStorefront) answers in-process.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | `products` | `GET /products` |
//! | `search` | `GET /products/search?value=` |
//! | `register` | `POST /auth/register` |
//! | `login` | `POST /auth/login` |
//! | `cart` | `GET /cart` |
//! | `set_cart_quantity` | `POST /cart` |
//! | `addresses` | `GET /user/addresses` |
//! | `add_address` | `POST /user/addresses` |
//! | `delete_address` | `DELETE /user/addresses/:id` |
//! | `checkout` | `POST /cart/checkout` |
//!
//! Every method taking a `token` is a protected route and sends it as a bearer token.

pub mod error;
pub mod http;

pub use error::*;
pub use http::HttpStorefront;

use crate::cart::QuantityUpdate;
use crate::model::{Address, AddressId, CartEntry, Credentials, LoginResponse, Product};
use async_trait::async_trait;

#[async_trait]
pub trait StorefrontApi: Send + Sync {
    async fn products(&self) -> Result<Vec<Product>, ApiError>;

    /// # Errors
    /// A 404 rejection when nothing matches.
    async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError>;

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError>;

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    async fn cart(&self, token: &str) -> Result<Vec<CartEntry>, ApiError>;

    /// Persists one quantity (zero deletes) and returns the whole updated cart.
    async fn set_cart_quantity(
        &self,
        token: &str,
        update: &QuantityUpdate,
    ) -> Result<Vec<CartEntry>, ApiError>;

    async fn addresses(&self, token: &str) -> Result<Vec<Address>, ApiError>;

    async fn add_address(&self, token: &str, address: &str) -> Result<Vec<Address>, ApiError>;

    async fn delete_address(&self, token: &str, id: &AddressId)
        -> Result<Vec<Address>, ApiError>;

    /// Places the order for the whole server-side cart.
    async fn checkout(&self, token: &str, address_id: &AddressId) -> Result<(), ApiError>;
}
