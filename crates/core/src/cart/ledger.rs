//! Cart ledger and line items.

use serde::{Deserialize, Serialize};

use super::{CartTotals, ShippingPolicy};
use crate::catalog::Product;
use crate::types::{Price, ProductId, Quantity};

/// One product entry in the cart.
///
/// Invariants live in the field types: `unit_price` is never negative and
/// `quantity` is never below one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    pub unit_price: Price,
    /// Opaque handle to the display image.
    pub image: String,
    pub quantity: Quantity,
}

impl LineItem {
    /// Create a line item for `quantity` units of `product`.
    #[must_use]
    pub fn new(product: &Product, quantity: Quantity) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// In-memory shopping cart.
///
/// Holds at most one line per product. Totals are derived from the lines on
/// every call to [`CartLedger::compute_totals`] and never stored.
///
/// ```
/// use shophub_core::{CartLedger, Catalog, ProductId, Quantity};
///
/// let catalog = Catalog::demo();
/// let earbuds = catalog.get(ProductId::new(6)).unwrap();
///
/// let mut cart = CartLedger::new();
/// cart.add_or_increment(earbuds, Quantity::ONE);
/// cart.add_or_increment(earbuds, Quantity::ONE);
///
/// assert_eq!(cart.len(), 1);
/// assert_eq!(cart.item_count(), 2);
/// assert_eq!(cart.compute_totals().total.to_string(), "$299.98");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLedger {
    items: Vec<LineItem>,
    policy: ShippingPolicy,
}

impl CartLedger {
    /// Create an empty cart with the default shipping policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart with a custom shipping policy.
    #[must_use]
    pub const fn with_policy(policy: ShippingPolicy) -> Self {
        Self {
            items: Vec::new(),
            policy,
        }
    }

    /// Add `quantity` units of `product`.
    ///
    /// If the product is already in the cart its quantity grows (saturating);
    /// otherwise a new line is appended. Returns the line's resulting quantity.
    pub fn add_or_increment(&mut self, product: &Product, quantity: Quantity) -> Quantity {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            return item.quantity;
        }
        self.items.push(LineItem::new(product, quantity));
        quantity
    }

    /// Set a line's quantity, clamping anything below one to one.
    ///
    /// Returns the new quantity, or `None` (and changes nothing) if the
    /// product is not in the cart.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> Option<Quantity> {
        let item = self.items.iter_mut().find(|i| i.product_id == product_id)?;
        item.quantity = Quantity::clamped(quantity);
        Some(item.quantity)
    }

    /// Change a line's quantity by `delta`, with the same clamping and
    /// not-found behavior as [`CartLedger::set_quantity`].
    pub fn adjust_quantity(&mut self, product_id: ProductId, delta: i64) -> Option<Quantity> {
        let current = self.get(product_id)?.quantity;
        self.set_quantity(product_id, i64::from(current.get()).saturating_add(delta))
    }

    /// Remove a product's line regardless of quantity.
    ///
    /// Idempotent: returns the removed line, or `None` if it wasn't there.
    pub fn remove(&mut self, product_id: ProductId) -> Option<LineItem> {
        let index = self.position(product_id)?;
        Some(self.items.remove(index))
    }

    /// Derive subtotal, shipping fee and total from the current lines.
    #[must_use]
    pub fn compute_totals(&self) -> CartTotals {
        let subtotal = self.items.iter().map(LineItem::line_total).sum();
        self.policy.totals(subtotal, self.items.is_empty())
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.position(product_id).is_some()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|i| u64::from(i.quantity.get()))
            .sum()
    }

    #[must_use]
    pub const fn policy(&self) -> &ShippingPolicy {
        &self.policy
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product_id == product_id)
    }
}
