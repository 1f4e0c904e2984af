use crate::model::{CartEntry, CartLineItem, ProductId};

/// The two quantity transitions a cart line offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Increment,
    /// Floors at zero.
    Decrement,
}

impl Adjustment {
    pub fn apply(self, current: u32) -> u32 {
        match self {
            Adjustment::Increment => current.saturating_add(1),
            Adjustment::Decrement => current.saturating_sub(1),
        }
    }
}

/// A requested quantity for one product: the `(productId, newQuantity)` callback shape.
///
/// Zero means "delete the entry"; the cart never keeps a zero-quantity record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityUpdate {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl QuantityUpdate {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }

    pub fn adjust(item: &CartLineItem, adjustment: Adjustment) -> Self {
        Self::new(item.product_id.clone(), adjustment.apply(item.quantity))
    }

    pub fn is_removal(&self) -> bool {
        self.quantity == 0
    }
}

/// Applies an update to a cart the way the backend persists it.
pub fn apply_update(entries: &mut Vec<CartEntry>, update: &QuantityUpdate) {
    let position = entries
        .iter()
        .position(|entry| entry.product_id == update.product_id);
    match position {
        Some(i) if update.is_removal() => {
            entries.remove(i);
        }
        Some(i) => entries[i].quantity = update.quantity,
        None if update.is_removal() => {}
        None => entries.push(CartEntry::new(update.product_id.clone(), update.quantity)),
    }
}
