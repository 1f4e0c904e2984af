//! # AccessGrant Actor
//!
//! Bearer tokens handed out at login. A grant is created per successful login and resolved
//! on every protected request; grants carry no actions.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::GrantClient;
use crate::framework::ResourceActor;
use crate::model::AccessGrant;

/// Creates a new AccessGrant actor and its client.
pub fn new() -> (ResourceActor<AccessGrant>, GrantClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, GrantClient::new(generic_client))
}
