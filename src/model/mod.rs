//! Pure data structures shared by the storefront, the API clients and the in-memory backend.
//!
//! Field names follow the backend's JSON shapes (`_id`, `image`, `qty`, ...) through serde
//! renames so the same types travel over the wire and through the actors.

pub mod account;
pub mod cart;
pub mod product;

pub use account::*;
pub use cart::*;
pub use product::*;
