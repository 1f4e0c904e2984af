//! [`StorefrontApi`] over HTTP with `reqwest`.

use super::{ApiError, StorefrontApi};
use crate::cart::QuantityUpdate;
use crate::config::StorefrontConfig;
use crate::model::{Address, AddressId, CartEntry, Credentials, LoginResponse, Product};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Error body sent with every non-2xx answer.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone)]
pub struct HttpStorefront {
    client: Client,
    endpoint: String,
}

impl HttpStorefront {
    /// `endpoint` is the API root, e.g. `http://localhost:8082/api/v1`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns `None` when no endpoint is configured.
    pub fn from_config(config: &StorefrontConfig) -> Option<Result<Self, ApiError>> {
        config
            .endpoint
            .as_ref()
            .map(|endpoint| Self::new(endpoint.clone(), config.timeout))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
        warn!(status = status.as_u16(), %message, "Backend rejected request");
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefront {
    #[instrument(skip(self))]
    async fn products(&self) -> Result<Vec<Product>, ApiError> {
        debug!("Sending request");
        self.send(self.client.get(self.url("/products"))).await
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        debug!("Sending request");
        let request = self
            .client
            .get(self.url("/products/search"))
            .query(&[("value", query)]);
        self.send(request).await
    }

    #[instrument(skip(self))]
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        debug!("Sending request");
        let request = self
            .client
            .post(self.url("/auth/register"))
            .json(credentials);
        self.send::<IgnoredAny>(request).await.map(|_| ())
    }

    #[instrument(skip(self))]
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        debug!("Sending request");
        let request = self.client.post(self.url("/auth/login")).json(credentials);
        self.send(request).await
    }

    #[instrument(skip(self, token))]
    async fn cart(&self, token: &str) -> Result<Vec<CartEntry>, ApiError> {
        debug!("Sending request");
        let request = self.client.get(self.url("/cart")).bearer_auth(token);
        self.send(request).await
    }

    #[instrument(skip(self, token))]
    async fn set_cart_quantity(
        &self,
        token: &str,
        update: &QuantityUpdate,
    ) -> Result<Vec<CartEntry>, ApiError> {
        debug!("Sending request");
        let request = self
            .client
            .post(self.url("/cart"))
            .bearer_auth(token)
            .json(&json!({ "productId": update.product_id, "qty": update.quantity }));
        self.send(request).await
    }

    #[instrument(skip(self, token))]
    async fn addresses(&self, token: &str) -> Result<Vec<Address>, ApiError> {
        debug!("Sending request");
        let request = self.client.get(self.url("/user/addresses")).bearer_auth(token);
        self.send(request).await
    }

    #[instrument(skip(self, token))]
    async fn add_address(&self, token: &str, address: &str) -> Result<Vec<Address>, ApiError> {
        debug!("Sending request");
        let request = self
            .client
            .post(self.url("/user/addresses"))
            .bearer_auth(token)
            .json(&json!({ "address": address }));
        self.send(request).await
    }

    #[instrument(skip(self, token))]
    async fn delete_address(
        &self,
        token: &str,
        id: &AddressId,
    ) -> Result<Vec<Address>, ApiError> {
        debug!("Sending request");
        let request = self
            .client
            .delete(self.url(&format!("/user/addresses/{}", id)))
            .bearer_auth(token);
        self.send(request).await
    }

    #[instrument(skip(self, token))]
    async fn checkout(&self, token: &str, address_id: &AddressId) -> Result<(), ApiError> {
        debug!("Sending request");
        let request = self
            .client
            .post(self.url("/cart/checkout"))
            .bearer_auth(token)
            .json(&json!({ "addressId": address_id }));
        self.send::<IgnoredAny>(request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trailing_slash_is_dropped() {
        let api = HttpStorefront::new("http://localhost:8082/api/v1/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.endpoint(), "http://localhost:8082/api/v1");
        assert_eq!(api.url("/products"), "http://localhost:8082/api/v1/products");
    }

    #[test]
    fn test_error_body_message_is_optional() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"success":false,"message":"Password is incorrect"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Password is incorrect"));

        let body: ErrorBody = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(body.message.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_transport_error() {
        // Port 9 (discard) is closed on test machines.
        let api = HttpStorefront::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let result = api.products().await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
