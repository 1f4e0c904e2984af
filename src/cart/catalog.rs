use super::reconcile::{join, Reconciliation};
use crate::model::{CartEntry, Product, ProductId};
use std::collections::HashMap;

/// A fetched product list plus an id index, built once per catalog fetch.
///
/// Keeps the backend's listing order for display and answers id lookups in O(1). On
/// duplicate ids the first listed product is the one the index points at.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            by_id.entry(product.id.clone()).or_insert(position);
        }
        Self { products, by_id }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).map(|&position| &self.products[position])
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Same join as [`reconcile`](super::reconcile), reusing this index.
    pub fn reconcile(&self, entries: &[CartEntry]) -> Reconciliation {
        join(entries, |id| self.get(id))
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::reconcile;

    #[test]
    fn test_catalog_matches_free_function() {
        let products = vec![
            Product::new("p1", "Pen", "Stationery", 10.0, 4),
            Product::new("p2", "Notebook", "Stationery", 25.0, 5),
            Product::new("p1", "Shadow", "Stationery", 1.0, 1),
        ];
        let entries = vec![CartEntry::new("p2", 1), CartEntry::new("p1", 2), CartEntry::new("x", 1)];

        let catalog = Catalog::new(products.clone());
        assert_eq!(catalog.reconcile(&entries), reconcile(&entries, &products));
        assert_eq!(catalog.get(&ProductId::from("p1")).map(|p| p.name.as_str()), Some("Pen"));
        assert_eq!(catalog.len(), 3);
    }
}
