//! # Storefront
//!
//! [`Storefront`] is what a shopper's client holds: the session, the catalog, the cart as
//! the backend last reported it, and the address book. Every mutation goes to the backend
//! first; local state is replaced only with what the backend answers.

use crate::api::{ApiError, StorefrontApi};
use crate::cart::{is_product_in_cart, Adjustment, Catalog, CartSummary, QuantityUpdate};
use crate::model::{
    AddressBook, AddressId, CartEntry, CartLineItem, Credentials, Product, ProductId, Receipt,
};
use crate::session::{Session, SessionContext};
use crate::validation::{validate_checkout, validate_login, validate_register, ValidationError};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Login to add an item to the Cart")]
    NotLoggedIn,

    #[error("Item already in cart. Use the cart sidebar to update quantity or remove item.")]
    AlreadyInCart(ProductId),

    #[error("Product is not in the cart")]
    NotInCart(ProductId),

    #[error("Quantity must be at least 1")]
    ZeroQuantity(ProductId),

    #[error("Address not found")]
    UnknownAddress(AddressId),

    /// The backend refused and said why.
    #[error("{0}")]
    Rejected(String),

    #[error("Could not {action}. Check that the backend is running, reachable and returns valid JSON.")]
    Unreachable {
        action: &'static str,
        #[source]
        source: ApiError,
    },
}

impl StorefrontError {
    fn from_api(action: &'static str, e: ApiError) -> Self {
        match e {
            ApiError::Rejected { message, .. } => StorefrontError::Rejected(message),
            other => {
                warn!(action, error = %other, "Backend unreachable");
                StorefrontError::Unreachable {
                    action,
                    source: other,
                }
            }
        }
    }
}

/// What a cart mutation did, as told to the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added,
    Updated,
    Removed,
}

impl fmt::Display for CartChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CartChange::Added => "Product added to cart",
            CartChange::Updated => "Product quantity updated",
            CartChange::Removed => "Product removed from cart",
        })
    }
}

/// The cart joined with the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub items: Vec<CartLineItem>,
    /// Entries whose product is missing from the catalog; not priced.
    pub stale: Vec<CartEntry>,
    pub summary: CartSummary,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub struct Storefront<A: StorefrontApi> {
    api: A,
    session: SessionContext,
    catalog: Catalog,
    cart: Vec<CartEntry>,
    addresses: AddressBook,
}

impl<A: StorefrontApi> Storefront<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            session: SessionContext::new(),
            catalog: Catalog::default(),
            cart: Vec::new(),
            addresses: AddressBook::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Consumes the storefront, handing back its backend.
    pub fn into_api(self) -> A {
        self.api
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart_entries(&self) -> &[CartEntry] {
        &self.cart
    }

    pub fn addresses(&self) -> &AddressBook {
        &self.addresses
    }

    fn token(&self) -> Result<String, StorefrontError> {
        self.session
            .token()
            .map(str::to_string)
            .ok_or(StorefrontError::NotLoggedIn)
    }

    // ---------------------------------------------------------------------
    // Accounts
    // ---------------------------------------------------------------------

    #[instrument(skip(self, confirm_password))]
    pub async fn register(
        &self,
        credentials: &Credentials,
        confirm_password: &str,
    ) -> Result<(), StorefrontError> {
        validate_register(credentials, confirm_password)?;
        self.api
            .register(credentials)
            .await
            .map_err(|e| StorefrontError::from_api("register", e))?;
        info!(username = %credentials.username, "Registered successfully");
        Ok(())
    }

    /// Logs in and begins a session.
    #[instrument(skip(self))]
    pub async fn login(&mut self, credentials: &Credentials) -> Result<Session, StorefrontError> {
        validate_login(credentials)?;
        let response = self
            .api
            .login(credentials)
            .await
            .map_err(|e| StorefrontError::from_api("log in", e))?;
        let session = Session::from(response);
        self.reset_caches();
        self.session.begin(session.clone());
        Ok(session)
    }

    /// Ends the session and forgets everything tied to it.
    pub fn logout(&mut self) -> Option<Session> {
        self.reset_caches();
        self.session.end()
    }

    /// Drops the cart and addresses cached for the current shopper.
    fn reset_caches(&mut self) {
        self.cart.clear();
        self.addresses = AddressBook::default();
    }

    // ---------------------------------------------------------------------
    // Catalog
    // ---------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn load_catalog(&mut self) -> Result<&Catalog, StorefrontError> {
        let products = self.fetch_products().await?;
        self.catalog = Catalog::new(products);
        debug!(size = self.catalog.len(), "Catalog loaded");
        Ok(&self.catalog)
    }

    /// Products matching `query`; a blank query lists everything.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, StorefrontError> {
        let query = query.trim();
        if query.is_empty() {
            return self.fetch_products().await;
        }
        match self.api.search(query).await {
            Ok(products) => Ok(products),
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(StorefrontError::from_api("search products", e)),
        }
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, StorefrontError> {
        match self.api.products().await {
            Ok(products) => Ok(products),
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(StorefrontError::from_api("fetch products", e)),
        }
    }

    // ---------------------------------------------------------------------
    // Cart
    // ---------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn load_cart(&mut self) -> Result<&[CartEntry], StorefrontError> {
        let token = self.token()?;
        self.cart = self
            .api
            .cart(&token)
            .await
            .map_err(|e| StorefrontError::from_api("fetch cart details", e))?;
        Ok(&self.cart)
    }

    /// The cached cart priced against the cached catalog.
    pub fn cart_view(&self) -> CartView {
        let joined = self.catalog.reconcile(&self.cart);
        let summary = CartSummary::of(&joined.items);
        CartView {
            items: joined.items,
            stale: joined.stale,
            summary,
        }
    }

    /// Adds a product that is not in the cart yet, starting at `quantity` (at least 1).
    #[instrument(skip(self))]
    pub async fn add_to_cart(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<CartChange, StorefrontError> {
        self.token()?;
        if quantity == 0 {
            return Err(StorefrontError::ZeroQuantity(product_id.clone()));
        }
        if is_product_in_cart(&self.cart, product_id) {
            return Err(StorefrontError::AlreadyInCart(product_id.clone()));
        }
        self.set_quantity(QuantityUpdate::new(product_id.clone(), quantity))
            .await
    }

    /// Moves a cart line's quantity one step; decrementing the last unit removes it.
    #[instrument(skip(self))]
    pub async fn adjust_quantity(
        &mut self,
        product_id: &ProductId,
        adjustment: Adjustment,
    ) -> Result<CartChange, StorefrontError> {
        self.token()?;
        let current = self
            .cart
            .iter()
            .find(|entry| &entry.product_id == product_id)
            .map(|entry| entry.quantity)
            .ok_or_else(|| StorefrontError::NotInCart(product_id.clone()))?;
        self.set_quantity(QuantityUpdate::new(product_id.clone(), adjustment.apply(current)))
            .await
    }

    /// Persists a quantity and adopts the cart the backend returns.
    #[instrument(skip(self))]
    pub async fn set_quantity(
        &mut self,
        update: QuantityUpdate,
    ) -> Result<CartChange, StorefrontError> {
        let token = self.token()?;
        let was_in_cart = is_product_in_cart(&self.cart, &update.product_id);
        self.cart = self
            .api
            .set_cart_quantity(&token, &update)
            .await
            .map_err(|e| StorefrontError::from_api("update cart", e))?;

        let change = if update.is_removal() {
            CartChange::Removed
        } else if was_in_cart {
            CartChange::Updated
        } else {
            CartChange::Added
        };
        info!(product_id = %update.product_id, quantity = update.quantity, "{}", change);
        Ok(change)
    }

    // ---------------------------------------------------------------------
    // Addresses
    // ---------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn load_addresses(&mut self) -> Result<&AddressBook, StorefrontError> {
        let token = self.token()?;
        let all = self
            .api
            .addresses(&token)
            .await
            .map_err(|e| StorefrontError::from_api("fetch addresses", e))?;
        self.addresses.replace(all);
        Ok(&self.addresses)
    }

    #[instrument(skip(self))]
    pub async fn add_address(&mut self, address: &str) -> Result<&AddressBook, StorefrontError> {
        let token = self.token()?;
        let all = self
            .api
            .add_address(&token, address)
            .await
            .map_err(|e| StorefrontError::from_api("add this address", e))?;
        self.addresses.replace(all);
        Ok(&self.addresses)
    }

    #[instrument(skip(self))]
    pub async fn delete_address(
        &mut self,
        id: &AddressId,
    ) -> Result<&AddressBook, StorefrontError> {
        let token = self.token()?;
        let all = self
            .api
            .delete_address(&token, id)
            .await
            .map_err(|e| StorefrontError::from_api("delete this address", e))?;
        self.addresses.replace(all);
        Ok(&self.addresses)
    }

    pub fn select_address(&mut self, id: &AddressId) -> Result<(), StorefrontError> {
        if self.addresses.select(id) {
            Ok(())
        } else {
            Err(StorefrontError::UnknownAddress(id.clone()))
        }
    }

    // ---------------------------------------------------------------------
    // Checkout
    // ---------------------------------------------------------------------

    /// Places the order for the cached cart, shipped to the selected address.
    #[instrument(skip(self))]
    pub async fn checkout(&mut self) -> Result<Receipt, StorefrontError> {
        let token = self.token()?;
        let balance = self.session.balance().ok_or(StorefrontError::NotLoggedIn)?;
        let total = self.cart_view().summary.total;
        validate_checkout(total, balance, &self.addresses)?;
        let address_id = self
            .addresses
            .selected()
            .map(|a| a.id.clone())
            .ok_or(ValidationError::NoAddressSelected)?;

        self.api
            .checkout(&token, &address_id)
            .await
            .map_err(|e| StorefrontError::from_api("place order", e))?;

        let balance = balance - total;
        self.session.set_balance(balance);
        self.cart.clear();
        info!(total, balance, "Order placed successfully");
        Ok(Receipt { total, balance })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_change_messages() {
        assert_eq!(CartChange::Added.to_string(), "Product added to cart");
        assert_eq!(CartChange::Updated.to_string(), "Product quantity updated");
        assert_eq!(CartChange::Removed.to_string(), "Product removed from cart");
    }

    #[test]
    fn test_unreachable_message_names_the_action() {
        let err = StorefrontError::from_api("fetch products", ApiError::Transport("refused".into()));
        assert_eq!(
            err.to_string(),
            "Could not fetch products. Check that the backend is running, reachable and returns valid JSON."
        );

        let err = StorefrontError::from_api("fetch products", ApiError::bad_request("Nope"));
        assert_eq!(err, StorefrontError::Rejected("Nope".to_string()));
    }
}
