//! Form checks run before anything is sent to the backend.
//!
//! Each validator reports the first failing rule only, in the order the forms list them.
//! Lengths count Unicode scalar values (`chars()`), not bytes.

use crate::model::{AddressBook, Credentials};
use thiserror::Error;

pub const MIN_USERNAME_LEN: usize = 6;
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username is a required field")]
    UsernameRequired,
    #[error("Password is a required field")]
    PasswordRequired,
    #[error("Username must be at least 6 characters")]
    UsernameTooShort,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You do not have enough balance in your wallet for this purchase")]
    InsufficientBalance,
    #[error("Please add a new address before proceeding.")]
    NoAddress,
    #[error("Please select one shipping address to proceed.")]
    NoAddressSelected,
}

pub fn validate_login(credentials: &Credentials) -> Result<(), ValidationError> {
    if credentials.username.is_empty() {
        return Err(ValidationError::UsernameRequired);
    }
    if credentials.password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}

pub fn validate_register(
    credentials: &Credentials,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    validate_login(credentials)?;
    if credentials.username.chars().count() < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort);
    }
    if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if credentials.password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_checkout(
    total: f64,
    balance: f64,
    addresses: &AddressBook,
) -> Result<(), ValidationError> {
    if total > balance {
        return Err(ValidationError::InsufficientBalance);
    }
    if addresses.all.is_empty() {
        return Err(ValidationError::NoAddress);
    }
    if addresses.selected().is_none() {
        return Err(ValidationError::NoAddressSelected);
    }
    Ok(())
}
