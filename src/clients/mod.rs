//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod account_client;
pub mod actor_client;
pub mod grant_client;
pub mod product_client;

pub use account_client::*;
pub use actor_client::*;
pub use grant_client::*;
pub use product_client::*;
