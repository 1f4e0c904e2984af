//! Starting, wiring and stopping the in-memory backend, plus tracing setup.

pub mod memory_storefront;
pub mod tracing;

pub use memory_storefront::MemoryStorefront;
pub use self::tracing::setup_tracing;
