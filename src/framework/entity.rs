//! # ActorEntity Trait
//!
//! The contract every resource managed by a [`ResourceActor`](crate::framework::ResourceActor)
//! implements: how a record is keyed and built, and how it reacts to its resource-specific
//! actions.
//!
//! Associated types keep every request typed: an `Account` actor only accepts
//! `Credentials` as a create payload and `AccountAction`s as actions.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// The hooks are async so an entity can call other actors while handling a request. The
/// `Context` (usually clients of other actors) is injected through
/// [`ResourceActor::run`](crate::framework::ResourceActor::run) rather than at construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Key of a record in the actor's store.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Data required to create a new record.
    type Create: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `SetCartQuantity`).
    type Action: Send + Sync + Debug;

    /// Result returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the hooks. `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum per resource; it travels boxed inside
    /// [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Picks the key for a new record.
    ///
    /// `sequence` starts at 1 and advances on every successful create. Entities with a
    /// natural key (a username) ignore it; a key that is already taken makes the create
    /// fail with `AlreadyExists`.
    fn assign_id(sequence: u32, params: &Self::Create) -> Self::Id;

    /// Builds the record. Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the record is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a resource-specific action on a stored record.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
