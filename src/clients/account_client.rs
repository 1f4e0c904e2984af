//! # Account Client
//!
//! Typed front for the account actor. Each method wraps one [`AccountAction`] and unpacks
//! the matching [`AccountActionResult`].

use crate::account_actor::{AccountAction, AccountActionResult, AccountError};
use crate::cart::QuantityUpdate;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Account, Address, AddressId, CartEntry, Credentials, Receipt};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Account actor.
#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Account> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<Account> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<AccountError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(username)) => AccountError::UnknownUser(username),
            Err(FrameworkError::AlreadyExists(username)) => AccountError::AlreadyExists(username),
            Err(other) => AccountError::from(other.to_string()),
        }
    }
}

impl AccountClient {
    /// Creates the account and returns its username.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn register(&self, credentials: Credentials) -> Result<String, AccountError> {
        debug!("Sending request");
        let username = self.inner.create(credentials).await.map_err(Self::map_error)?;
        info!("Account registered");
        Ok(username)
    }

    /// Checks the password and returns the wallet balance.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn authenticate(&self, credentials: Credentials) -> Result<f64, AccountError> {
        let username = credentials.username.clone();
        match self.act(username, AccountAction::Authenticate(credentials)).await? {
            AccountActionResult::Authenticated { balance } => Ok(balance),
            other => Err(unexpected("Authenticate", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn cart(&self, username: String) -> Result<Vec<CartEntry>, AccountError> {
        let account = self
            .get(username.clone())
            .await?
            .ok_or(AccountError::UnknownUser(username))?;
        Ok(account.cart)
    }

    #[instrument(skip(self))]
    pub async fn set_cart_quantity(
        &self,
        username: String,
        update: QuantityUpdate,
    ) -> Result<Vec<CartEntry>, AccountError> {
        match self.act(username, AccountAction::SetCartQuantity(update)).await? {
            AccountActionResult::Cart(cart) => Ok(cart),
            other => Err(unexpected("SetCartQuantity", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn addresses(&self, username: String) -> Result<Vec<Address>, AccountError> {
        let account = self
            .get(username.clone())
            .await?
            .ok_or(AccountError::UnknownUser(username))?;
        Ok(account.addresses)
    }

    #[instrument(skip(self))]
    pub async fn add_address(
        &self,
        username: String,
        address: String,
    ) -> Result<Vec<Address>, AccountError> {
        match self.act(username, AccountAction::AddAddress(address)).await? {
            AccountActionResult::Addresses(all) => Ok(all),
            other => Err(unexpected("AddAddress", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_address(
        &self,
        username: String,
        address_id: AddressId,
    ) -> Result<Vec<Address>, AccountError> {
        match self.act(username, AccountAction::DeleteAddress(address_id)).await? {
            AccountActionResult::Addresses(all) => Ok(all),
            other => Err(unexpected("DeleteAddress", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn checkout(
        &self,
        username: String,
        address_id: AddressId,
    ) -> Result<Receipt, AccountError> {
        match self.act(username, AccountAction::Checkout { address_id }).await? {
            AccountActionResult::CheckedOut(receipt) => Ok(receipt),
            other => Err(unexpected("Checkout", other)),
        }
    }

    async fn act(
        &self,
        username: String,
        action: AccountAction,
    ) -> Result<AccountActionResult, AccountError> {
        debug!("Sending request");
        self.inner
            .perform_action(username, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(action: &str, result: AccountActionResult) -> AccountError {
    AccountError::from(format!("{} answered with {:?}", action, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_set_cart_quantity_sends_the_update() {
        let (client, mut receiver) = create_mock_client::<Account>(10);
        let account_client = AccountClient::new(client);

        let task = tokio::spawn(async move {
            account_client
                .set_cart_quantity("crio.do".to_string(), QuantityUpdate::new("p1", 3))
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, "crio.do");
        match action {
            AccountAction::SetCartQuantity(update) => {
                assert_eq!(update, QuantityUpdate::new("p1", 3))
            }
            other => panic!("Expected SetCartQuantity, got {:?}", other),
        }
        responder
            .send(Ok(AccountActionResult::Cart(vec![CartEntry::new("p1", 3)])))
            .unwrap();

        let cart = task.await.unwrap().unwrap();
        assert_eq!(cart, vec![CartEntry::new("p1", 3)]);
    }

    #[tokio::test]
    async fn test_entity_error_is_recovered() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_action("crio.do".to_string())
            .return_err(FrameworkError::EntityError(Box::new(AccountError::WrongPassword)));
        let client = AccountClient::new(mock.client());

        let result = client
            .authenticate(Credentials::new("crio.do", "wrong"))
            .await;
        assert_eq!(result, Err(AccountError::WrongPassword));
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_account_is_unknown_user() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_action("ghost".to_string())
            .return_err(FrameworkError::NotFound("ghost".to_string()));
        let client = AccountClient::new(mock.client());

        let result = client
            .add_address("ghost".to_string(), "x".repeat(25))
            .await;
        assert_eq!(result, Err(AccountError::UnknownUser("ghost".to_string())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_reply_is_an_error_not_a_panic() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_action("crio.do".to_string())
            .return_ok(AccountActionResult::Cart(Vec::new()));
        let client = AccountClient::new(mock.client());

        let result = client
            .checkout("crio.do".to_string(), AddressId::from("address_1"))
            .await;
        assert!(matches!(result, Err(AccountError::ActorCommunicationError(_))));
        mock.verify();
    }
}
