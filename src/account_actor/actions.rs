//! Custom actions for the Account actor.
//!
//! Everything a signed-in shopper changes on the backend (cart quantities, saved
//! addresses, placing the order) is an action on their [`Account`](crate::model::Account).

use crate::cart::QuantityUpdate;
use crate::model::{Address, AddressId, CartEntry, Credentials, Receipt};

#[derive(Debug, Clone)]
pub enum AccountAction {
    /// Checks the password. The username inside is ignored; the actor key decides.
    Authenticate(Credentials),
    /// Sets one product's quantity; zero deletes the entry.
    ///
    /// # Errors
    /// Fails if a non-zero quantity names a product the catalog does not sell.
    SetCartQuantity(QuantityUpdate),
    AddAddress(String),
    DeleteAddress(AddressId),
    /// Charges the wallet for the whole cart and empties it.
    Checkout { address_id: AddressId },
}

/// Results from AccountActions - variants match the actions that produce them.
#[derive(Debug, Clone)]
pub enum AccountActionResult {
    /// Wallet balance of the authenticated account.
    Authenticated { balance: f64 },
    /// The cart after the update.
    Cart(Vec<CartEntry>),
    /// The address list after the change.
    Addresses(Vec<Address>),
    CheckedOut(Receipt),
}
