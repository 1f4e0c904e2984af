//! # Cart Reconciliation
//!
//! Joins the sparse `(productId, qty)` entries the backend keeps for a cart with the product
//! catalog, and derives the totals shown next to the cart.
//!
//! Everything here is pure: inputs are borrowed, results are freshly built, and calling the
//! same function twice with the same inputs gives structurally identical output.
//!
//! ## Unmatched entries
//!
//! A cart entry whose product is missing from the catalog (the catalog was refetched, the
//! product was withdrawn, ...) is left out of the line items, returned in
//! [`Reconciliation::stale`] and logged at `warn` level. Totals are therefore always computed
//! over fully priced items.
//!
//! ```rust
//! use qkart::cart::{reconcile, total_quantity, total_value};
//! use qkart::model::{CartEntry, Product};
//!
//! let catalog = vec![
//!     Product::new("p1", "Pen", "Stationery", 10.0, 4),
//!     Product::new("p2", "Notebook", "Stationery", 25.0, 5),
//! ];
//! let entries = vec![CartEntry::new("p1", 2), CartEntry::new("p2", 1)];
//!
//! let cart = reconcile(&entries, &catalog);
//! assert_eq!(total_value(&cart.items), 45.0);
//! assert_eq!(total_quantity(&cart.items), 3);
//! ```

mod catalog;
mod quantity;
mod reconcile;
mod totals;

pub use catalog::Catalog;
pub use quantity::{apply_update, Adjustment, QuantityUpdate};
pub use reconcile::{reconcile, Reconciliation};
pub use totals::{is_product_in_cart, total_quantity, total_value, CartSummary};
