use crate::account_actor::AccountError;
use crate::api::{ApiError, StorefrontApi};
use crate::cart::QuantityUpdate;
use crate::clients::{AccountClient, ActorClient, GrantClient, ProductClient};
use crate::grant_actor::GrantError;
use crate::model::{
    Address, AddressId, CartEntry, Credentials, LoginResponse, Product, ProductDraft, ProductId,
};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{error, info, instrument};

/// An in-process storefront backend built from resource actors.
///
/// `MemoryStorefront` is responsible for:
/// - **Lifecycle Management**: starting and stopping the product, account and grant actors
/// - **Dependency Wiring**: the account actor gets the [`ProductClient`] as its context
/// - **Serving the API**: answering [`StorefrontApi`] calls the way the REST backend does
///
/// # Example
///
/// ```rust
/// use qkart::api::StorefrontApi;
/// use qkart::lifecycle::MemoryStorefront;
/// use qkart::model::ProductDraft;
///
/// #[tokio::main]
/// async fn main() {
///     let backend = MemoryStorefront::new();
///     backend
///         .seed(vec![ProductDraft::new("Pen", "Stationery", 10.0, 4)])
///         .await
///         .unwrap();
///     assert_eq!(backend.products().await.unwrap().len(), 1);
///     backend.shutdown().await.unwrap();
/// }
/// ```
pub struct MemoryStorefront {
    pub product_client: ProductClient,
    pub account_client: AccountClient,
    pub grant_client: GrantClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for MemoryStorefront {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorefront {
    /// Spawns the actors. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (product_actor, product_client) = crate::product_actor::new();
        let (account_actor, account_client) = crate::account_actor::new();
        let (grant_actor, grant_client) = crate::grant_actor::new();

        let product_handle = tokio::spawn(product_actor.run(()));
        let account_handle = tokio::spawn(account_actor.run(product_client.clone()));
        let grant_handle = tokio::spawn(grant_actor.run(()));

        Self {
            product_client,
            account_client,
            grant_client,
            handles: vec![product_handle, account_handle, grant_handle],
        }
    }

    /// Adds products to the catalog in order.
    pub async fn seed(&self, drafts: Vec<ProductDraft>) -> Result<Vec<ProductId>, ProductError> {
        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            ids.push(self.product_client.create_product(draft).await?);
        }
        info!(count = ids.len(), "Catalog seeded");
        Ok(ids)
    }

    /// Gracefully shuts down the backend.
    ///
    /// Dropping the clients closes the actors' channels; each actor then leaves its loop.
    /// Any client clones held elsewhere keep their actor alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down backend...");
        drop(self.grant_client);
        drop(self.account_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Backend shutdown complete.");
        Ok(())
    }

    async fn username_for(&self, token: &str) -> Result<String, ApiError> {
        self.grant_client.resolve(token).await.map_err(grant_rejection)
    }
}

fn product_rejection(e: ProductError) -> ApiError {
    match e {
        ProductError::NotFound(_) => ApiError::not_found(e.to_string()),
        ProductError::InvalidDraft(_) => ApiError::bad_request(e.to_string()),
        ProductError::ActorCommunicationError(_) => ApiError::internal(e.to_string()),
    }
}

fn account_rejection(e: AccountError) -> ApiError {
    match e {
        AccountError::AddressNotFound(_) => ApiError::not_found(e.to_string()),
        AccountError::Catalog(_) | AccountError::ActorCommunicationError(_) => {
            ApiError::internal(e.to_string())
        }
        _ => ApiError::bad_request(e.to_string()),
    }
}

fn grant_rejection(e: GrantError) -> ApiError {
    match e {
        GrantError::UnknownToken => ApiError::unauthorized(e.to_string()),
        GrantError::ActorCommunicationError(_) => ApiError::internal(e.to_string()),
    }
}

#[async_trait]
impl StorefrontApi for MemoryStorefront {
    #[instrument(skip(self))]
    async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.product_client.list().await.map_err(product_rejection)
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        let hits = self
            .product_client
            .search(query)
            .await
            .map_err(product_rejection)?;
        if hits.is_empty() {
            return Err(ApiError::not_found("No products found"));
        }
        Ok(hits)
    }

    #[instrument(skip(self))]
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.account_client
            .register(credentials.clone())
            .await
            .map(|_| ())
            .map_err(account_rejection)
    }

    #[instrument(skip(self))]
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let balance = self
            .account_client
            .authenticate(credentials.clone())
            .await
            .map_err(account_rejection)?;
        let token = self
            .grant_client
            .issue(credentials.username.clone())
            .await
            .map_err(grant_rejection)?;
        Ok(LoginResponse {
            success: true,
            token,
            username: credentials.username.clone(),
            balance,
        })
    }

    #[instrument(skip(self, token))]
    async fn cart(&self, token: &str) -> Result<Vec<CartEntry>, ApiError> {
        let username = self.username_for(token).await?;
        self.account_client
            .cart(username)
            .await
            .map_err(account_rejection)
    }

    #[instrument(skip(self, token))]
    async fn set_cart_quantity(
        &self,
        token: &str,
        update: &QuantityUpdate,
    ) -> Result<Vec<CartEntry>, ApiError> {
        let username = self.username_for(token).await?;
        self.account_client
            .set_cart_quantity(username, update.clone())
            .await
            .map_err(account_rejection)
    }

    #[instrument(skip(self, token))]
    async fn addresses(&self, token: &str) -> Result<Vec<Address>, ApiError> {
        let username = self.username_for(token).await?;
        self.account_client
            .addresses(username)
            .await
            .map_err(account_rejection)
    }

    #[instrument(skip(self, token))]
    async fn add_address(&self, token: &str, address: &str) -> Result<Vec<Address>, ApiError> {
        let username = self.username_for(token).await?;
        self.account_client
            .add_address(username, address.to_string())
            .await
            .map_err(account_rejection)
    }

    #[instrument(skip(self, token))]
    async fn delete_address(
        &self,
        token: &str,
        id: &AddressId,
    ) -> Result<Vec<Address>, ApiError> {
        let username = self.username_for(token).await?;
        self.account_client
            .delete_address(username, id.clone())
            .await
            .map_err(account_rejection)
    }

    #[instrument(skip(self, token))]
    async fn checkout(&self, token: &str, address_id: &AddressId) -> Result<(), ApiError> {
        let username = self.username_for(token).await?;
        let receipt = self
            .account_client
            .checkout(username, address_id.clone())
            .await
            .map_err(account_rejection)?;
        info!(total = receipt.total, balance = receipt.balance, "Checkout complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_token_is_unauthorized() {
        let backend = MemoryStorefront::new();
        let err = backend.cart("token_42").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::unauthorized("Protected route, Oauth2 Bearer token not found")
        );
        backend.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_login_messages() {
        let backend = MemoryStorefront::new();
        let creds = Credentials::new("crio.do", "learnbydoing");
        backend.register(&creds).await.unwrap();

        let err = backend.register(&creds).await.unwrap_err();
        assert_eq!(err.to_string(), "Username is already taken");

        let err = backend
            .login(&Credentials::new("crio.do", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Password is incorrect");

        let err = backend
            .login(&Credentials::new("nobody", "learnbydoing"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Username does not exist");

        let login = backend.login(&creds).await.unwrap();
        assert!(login.success);
        assert_eq!(login.username, "crio.do");
        assert_eq!(login.balance, 5000.0);
        backend.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_search_is_not_found() {
        let backend = MemoryStorefront::new();
        backend
            .seed(vec![ProductDraft::new("Pen", "Stationery", 10.0, 4)])
            .await
            .unwrap();
        assert_eq!(backend.search("pen").await.unwrap().len(), 1);
        assert!(backend.search("sofa").await.unwrap_err().is_not_found());
        backend.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_cart_rejects_unknown_product() {
        let backend = MemoryStorefront::new();
        let creds = Credentials::new("crio.do", "learnbydoing");
        backend.register(&creds).await.unwrap();
        let token = backend.login(&creds).await.unwrap().token;

        let err = backend
            .set_cart_quantity(&token, &QuantityUpdate::new("product_9", 1))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::bad_request("Product doesn't exist"));
        backend.shutdown().await.unwrap();
    }
}
