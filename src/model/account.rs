use crate::model::CartEntry;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Wallet balance of a freshly registered account.
pub const STARTING_BALANCE: f64 = 5000.0;

/// Username and password as typed on the login and register forms.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Payloads get logged at debug level; keep the password out of them.
impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful reply to `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub username: String,
    pub balance: f64,
}

/// Type-safe identifier for shipping addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(pub String);

impl AddressId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AddressId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A shipping address saved on the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "_id")]
    pub id: AddressId,
    pub address: String,
}

/// All saved addresses plus the one picked for the next order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    pub all: Vec<Address>,
    pub selected: Option<AddressId>,
}

impl AddressBook {
    /// Replaces the list, keeping the selection only if it still exists.
    pub fn replace(&mut self, all: Vec<Address>) {
        if let Some(selected) = &self.selected {
            if !all.iter().any(|a| &a.id == selected) {
                self.selected = None;
            }
        }
        self.all = all;
    }

    /// Selects an address. Returns `false` if it is not in the book.
    pub fn select(&mut self, id: &AddressId) -> bool {
        if self.all.iter().any(|a| &a.id == id) {
            self.selected = Some(id.clone());
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&Address> {
        let id = self.selected.as_ref()?;
        self.all.iter().find(|a| &a.id == id)
    }
}

/// A registered user as the in-memory backend stores it.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity); see
/// [`account_actor`](crate::account_actor) for its actions.
#[derive(Clone)]
pub struct Account {
    pub username: String,
    password: String,
    pub balance: f64,
    pub cart: Vec<CartEntry>,
    pub addresses: Vec<Address>,
    next_address: u32,
}

impl Account {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            username: credentials.username,
            password: credentials.password,
            balance: STARTING_BALANCE,
            cart: Vec::new(),
            addresses: Vec::new(),
            next_address: 1,
        }
    }

    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }

    /// Saves an address under a fresh id and returns it.
    pub fn push_address(&mut self, address: String) -> &Address {
        let id = AddressId(format!("address_{}", self.next_address));
        self.next_address += 1;
        self.addresses.push(Address { id, address });
        &self.addresses[self.addresses.len() - 1]
    }
}

impl Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("balance", &self.balance)
            .field("cart", &self.cart)
            .field("addresses", &self.addresses)
            .finish_non_exhaustive()
    }
}

/// A bearer token issued at login, mapped to the account it authenticates.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessGrant {
    pub token: String,
    pub username: String,
}

/// What a successful checkout charged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub total: f64,
    /// Wallet balance after the charge.
    pub balance: f64,
}
