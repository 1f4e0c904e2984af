use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::grant_actor::GrantError;
use crate::model::AccessGrant;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the AccessGrant actor.
#[derive(Clone)]
pub struct GrantClient {
    inner: ResourceClient<AccessGrant>,
}

impl GrantClient {
    pub fn new(inner: ResourceClient<AccessGrant>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<AccessGrant> for GrantClient {
    type Error = GrantError;

    fn inner(&self) -> &ResourceClient<AccessGrant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        GrantError::from(e.to_string())
    }
}

impl GrantClient {
    /// Issues a fresh bearer token for `username`.
    #[instrument(skip(self))]
    pub async fn issue(&self, username: String) -> Result<String, GrantError> {
        debug!("Sending request");
        self.inner.create(username).await.map_err(Self::map_error)
    }

    /// The username a token belongs to.
    #[instrument(skip(self, token))]
    pub async fn resolve(&self, token: &str) -> Result<String, GrantError> {
        self.get(token.to_string())
            .await?
            .map(|grant| grant.username)
            .ok_or(GrantError::UnknownToken)
    }
}
