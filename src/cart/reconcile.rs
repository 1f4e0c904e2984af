use crate::model::{CartEntry, CartLineItem, Product, ProductId};
use std::collections::HashMap;
use tracing::warn;

/// Result of joining cart entries with the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    /// Priced line items, in the order the backend returned the entries.
    pub items: Vec<CartLineItem>,
    /// Entries whose product is not in the catalog.
    pub stale: Vec<CartEntry>,
}

impl Reconciliation {
    /// `true` when every entry found its product.
    pub fn is_complete(&self) -> bool {
        self.stale.is_empty()
    }
}

/// Joins `entries` with `catalog`.
///
/// The catalog is indexed once by id; if it carries duplicate ids the first occurrence wins.
/// Entry order is preserved.
pub fn reconcile(entries: &[CartEntry], catalog: &[Product]) -> Reconciliation {
    let mut index: HashMap<&ProductId, &Product> = HashMap::with_capacity(catalog.len());
    for product in catalog {
        index.entry(&product.id).or_insert(product);
    }
    join(entries, |id| index.get(id).copied())
}

pub(super) fn join<'a>(
    entries: &[CartEntry],
    lookup: impl Fn(&ProductId) -> Option<&'a Product>,
) -> Reconciliation {
    let mut result = Reconciliation {
        items: Vec::with_capacity(entries.len()),
        stale: Vec::new(),
    };
    for entry in entries {
        match lookup(&entry.product_id) {
            Some(product) => result.items.push(CartLineItem::new(product, entry.quantity)),
            None => {
                warn!(product_id = %entry.product_id, quantity = entry.quantity, "Cart entry has no catalog product");
                result.stale.push(entry.clone());
            }
        }
    }
    result
}
