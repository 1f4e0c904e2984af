//! # Account Actor
//!
//! Registered shoppers of the in-memory backend: password, wallet, server-side cart and
//! saved addresses.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Account`]
//! - [`error`] - [`AccountError`], whose messages are the backend's replies
//! - [`actions`] - [`AccountAction`] and [`AccountActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor's context is a [`ProductClient`](crate::clients::ProductClient):
//!
//! ```rust,ignore
//! let (product_actor, product_client) = product_actor::new();
//! let (account_actor, account_client) = account_actor::new();
//! tokio::spawn(product_actor.run(()));
//! tokio::spawn(account_actor.run(product_client.clone()));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::AccountClient;
use crate::framework::ResourceActor;
use crate::model::Account;

/// Creates a new Account actor and its client.
pub fn new() -> (ResourceActor<Account>, AccountClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, AccountClient::new(generic_client))
}
