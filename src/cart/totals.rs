use crate::model::{CartEntry, CartLineItem, ProductId};
use serde::Serialize;

/// `Σ cost × quantity` over the line items. `0.0` for an empty cart.
pub fn total_value(items: &[CartLineItem]) -> f64 {
    items.iter().fold(0.0, |total, item| total + item.value())
}

/// `Σ quantity` over the line items. `0` for an empty cart.
pub fn total_quantity(items: &[CartLineItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

/// Whether the backend cart already holds `product_id`.
pub fn is_product_in_cart(entries: &[CartEntry], product_id: &ProductId) -> bool {
    entries.iter().any(|entry| &entry.product_id == product_id)
}

/// The order details panel shown beside a read-only cart at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartSummary {
    pub products: u32,
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

impl CartSummary {
    /// Shipping is free.
    pub fn of(items: &[CartLineItem]) -> Self {
        let subtotal = total_value(items);
        let shipping = 0.0;
        Self {
            products: total_quantity(items),
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::reconcile;
    use crate::model::Product;

    fn items() -> Vec<CartLineItem> {
        let catalog = vec![
            Product::new("p1", "Pen", "Stationery", 10.0, 4),
            Product::new("p2", "Notebook", "Stationery", 25.0, 5),
        ];
        let entries = vec![CartEntry::new("p1", 2), CartEntry::new("p2", 1)];
        reconcile(&entries, &catalog).items
    }

    #[test]
    fn test_totals_of_two_line_cart() {
        let items = items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].quantity, 1);
        assert_eq!(total_value(&items), 45.0);
        assert_eq!(total_quantity(&items), 3);
    }

    #[test]
    fn test_totals_of_empty_cart_are_zero() {
        assert_eq!(total_value(&[]), 0.0);
        assert!(total_value(&[]).is_sign_positive());
        assert_eq!(total_quantity(&[]), 0);
    }

    #[test]
    fn test_totals_do_not_touch_input() {
        let items = items();
        let before = items.clone();
        let _ = total_value(&items);
        let _ = total_quantity(&items);
        assert_eq!(items, before);
    }

    #[test]
    fn test_is_product_in_cart() {
        let entries = vec![CartEntry::new("p1", 2), CartEntry::new("p2", 1)];
        assert!(is_product_in_cart(&entries, &ProductId::from("p2")));
        assert!(!is_product_in_cart(&entries, &ProductId::from("p9")));
        assert!(!is_product_in_cart(&[], &ProductId::from("p1")));
    }

    #[test]
    fn test_summary_has_free_shipping() {
        let summary = CartSummary::of(&items());
        assert_eq!(summary.products, 3);
        assert_eq!(summary.subtotal, 45.0);
        assert_eq!(summary.shipping, 0.0);
        assert_eq!(summary.total, 45.0);
    }
}
