//! Saved-for-later products.

use crate::catalog::{Catalog, Product};
use crate::types::ProductId;

/// Demo wishlist contents, by product ID.
const DEMO_WISHLIST: [i32; 3] = [1, 4, 5];

/// Result of toggling a product on the wishlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistChange {
    Added,
    Removed,
}

/// Ordered list of saved products, at most one entry per product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The demo wishlist, drawn from `catalog`. Missing products are skipped.
    #[must_use]
    pub fn demo(catalog: &Catalog) -> Self {
        let items = DEMO_WISHLIST
            .iter()
            .filter_map(|&id| catalog.get(ProductId::new(id)).cloned())
            .collect();
        Self { items }
    }

    /// Add the product if absent, remove it if present.
    pub fn toggle(&mut self, product: &Product) -> WishlistChange {
        if self.remove(product.id).is_some() {
            WishlistChange::Removed
        } else {
            self.items.push(product.clone());
            WishlistChange::Added
        }
    }

    /// Remove a product. Idempotent.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.items.iter().position(|p| p.id == id)?;
        Some(self.items.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_wishlist() {
        let wishlist = Wishlist::demo(&Catalog::demo());
        let ids: Vec<i32> = wishlist.items().iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 4, 5]);
        assert!(Wishlist::demo(&Catalog::default()).is_empty());
    }

    #[test]
    fn test_toggle_is_symmetric() {
        let catalog = Catalog::demo();
        let phone = catalog.get(ProductId::new(2)).unwrap();
        let mut wishlist = Wishlist::new();

        assert_eq!(wishlist.toggle(phone), WishlistChange::Added);
        assert!(wishlist.contains(phone.id));
        assert_eq!(wishlist.toggle(phone), WishlistChange::Removed);
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut wishlist = Wishlist::demo(&Catalog::demo());
        let removed = wishlist.remove(ProductId::new(4)).unwrap();
        assert_eq!(removed.name, "Smart Watch Series X");
        assert!(wishlist.remove(ProductId::new(4)).is_none());
        assert_eq!(wishlist.len(), 2);
    }
}
