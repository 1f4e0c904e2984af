//! Resource-actor framework powering the in-memory storefront backend.
//!
//! Each resource type (catalog products, accounts, access grants) lives in its own
//! [`ResourceActor`] task, which owns a keyed store and processes requests one at a time.
//! Callers talk to it through a cloneable [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the records of one resource type
//! - [`ResourceClient`] - Typed handle for sending requests to an actor
//! - [`FrameworkError`] - Channel failures, missing/duplicate keys and wrapped entity errors
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
