//! Error types for the Account actor.
//!
//! Display strings are what the storefront backend answers with, so they reach the shopper
//! unchanged.

use crate::model::{AddressId, ProductId};
use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    #[error("Username is already taken")]
    AlreadyExists(String),

    #[error("Username does not exist")]
    UnknownUser(String),

    #[error("Password is incorrect")]
    WrongPassword,

    #[error("\"username\" is not allowed to be empty")]
    EmptyUsername,

    #[error("Product doesn't exist")]
    ProductNotFound(ProductId),

    #[error("\"address\" length must be at least {min} characters long")]
    AddressTooShort { min: usize },

    #[error("Address not found")]
    AddressNotFound(AddressId),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cart holds products that are no longer sold")]
    StaleCart(Vec<ProductId>),

    #[error("Wallet balance not sufficient to place order")]
    InsufficientBalance { required: f64, available: f64 },

    /// The catalog actor could not be reached while validating a request.
    #[error("Catalog unavailable: {0}")]
    Catalog(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for AccountError {
    fn from(msg: String) -> Self {
        AccountError::ActorCommunicationError(msg)
    }
}
