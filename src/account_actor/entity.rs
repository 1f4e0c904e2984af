//! [`ActorEntity`] implementation for [`Account`].
//!
//! The account actor depends on the catalog: its context is a [`ProductClient`], used to
//! refuse unknown products and to price the cart at checkout.

use super::actions::{AccountAction, AccountActionResult};
use super::error::AccountError;
use crate::cart::{apply_update, reconcile, total_value};
use crate::clients::{ActorClient, ProductClient};
use crate::framework::ActorEntity;
use crate::model::{Account, AddressId, Credentials, Receipt};
use async_trait::async_trait;
use tracing::info;

/// Shortest address the backend accepts.
pub const MIN_ADDRESS_LEN: usize = 20;

#[async_trait]
impl ActorEntity for Account {
    type Id = String;
    type Create = Credentials;
    type Action = AccountAction;
    type ActionResult = AccountActionResult;
    type Context = ProductClient;
    type Error = AccountError;

    /// Accounts are keyed by username.
    fn assign_id(_sequence: u32, params: &Credentials) -> String {
        params.username.clone()
    }

    fn from_create_params(_id: String, params: Credentials) -> Result<Self, AccountError> {
        if params.username.is_empty() {
            return Err(AccountError::EmptyUsername);
        }
        Ok(Account::new(params))
    }

    async fn handle_action(
        &mut self,
        action: AccountAction,
        catalog: &ProductClient,
    ) -> Result<AccountActionResult, AccountError> {
        match action {
            AccountAction::Authenticate(credentials) => {
                if self.verify_password(&credentials.password) {
                    Ok(AccountActionResult::Authenticated {
                        balance: self.balance,
                    })
                } else {
                    Err(AccountError::WrongPassword)
                }
            }
            AccountAction::SetCartQuantity(update) => {
                if !update.is_removal() {
                    let product = catalog
                        .get(update.product_id.clone())
                        .await
                        .map_err(|e| AccountError::Catalog(e.to_string()))?;
                    if product.is_none() {
                        return Err(AccountError::ProductNotFound(update.product_id));
                    }
                }
                apply_update(&mut self.cart, &update);
                Ok(AccountActionResult::Cart(self.cart.clone()))
            }
            AccountAction::AddAddress(address) => {
                let address = address.trim().to_string();
                if address.chars().count() < MIN_ADDRESS_LEN {
                    return Err(AccountError::AddressTooShort {
                        min: MIN_ADDRESS_LEN,
                    });
                }
                self.push_address(address);
                Ok(AccountActionResult::Addresses(self.addresses.clone()))
            }
            AccountAction::DeleteAddress(id) => {
                let position = self
                    .addresses
                    .iter()
                    .position(|a| a.id == id)
                    .ok_or(AccountError::AddressNotFound(id))?;
                self.addresses.remove(position);
                Ok(AccountActionResult::Addresses(self.addresses.clone()))
            }
            AccountAction::Checkout { address_id } => {
                let receipt = self.checkout(&address_id, catalog).await?;
                Ok(AccountActionResult::CheckedOut(receipt))
            }
        }
    }
}

impl Account {
    async fn checkout(
        &mut self,
        address_id: &AddressId,
        catalog: &ProductClient,
    ) -> Result<Receipt, AccountError> {
        if self.cart.is_empty() {
            return Err(AccountError::EmptyCart);
        }
        if !self.addresses.iter().any(|a| &a.id == address_id) {
            return Err(AccountError::AddressNotFound(address_id.clone()));
        }

        let products = catalog
            .list()
            .await
            .map_err(|e| AccountError::Catalog(e.to_string()))?;
        let priced = reconcile(&self.cart, &products);
        if !priced.is_complete() {
            return Err(AccountError::StaleCart(
                priced.stale.into_iter().map(|e| e.product_id).collect(),
            ));
        }

        let total = total_value(&priced.items);
        if total > self.balance {
            return Err(AccountError::InsufficientBalance {
                required: total,
                available: self.balance,
            });
        }

        self.balance -= total;
        self.cart.clear();
        info!(username = %self.username, total, balance = self.balance, %address_id, "Order placed");
        Ok(Receipt {
            total,
            balance: self.balance,
        })
    }
}
