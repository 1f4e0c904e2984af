//! Error types for the AccessGrant actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GrantError {
    #[error("Protected route, Oauth2 Bearer token not found")]
    UnknownToken,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for GrantError {
    fn from(msg: String) -> Self {
        GrantError::ActorCommunicationError(msg)
    }
}
