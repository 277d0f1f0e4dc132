//! Integration test support for ShopHub.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shophub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_ledger` - Ledger invariants and pricing against hand-built products
//! - `storefront_session` - Whole sessions replayed from YAML scenarios
//!
//! # Scenarios
//!
//! A scenario file is a YAML list. Each entry names the session, optionally
//! supplies its own catalog (the demo catalog otherwise), the actions to
//! replay, and the expected cart afterwards:
//!
//! ```yaml
//! - name: one item under the threshold
//!   products:
//!     - { id: 1, name: Mug, price: "30.00", image: mug.jpg, rating: 4, category: Kitchen }
//!   actions:
//!     - { action: add, product: 1 }
//!   expect:
//!     lines: [{ product: 1, quantity: 1 }]
//!     subtotal: "30.00"
//!     shipping_fee: "9.99"
//!     total: "39.99"
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use serde::Deserialize;
use shophub_core::{
    Action, Catalog, Notice, OrderHistory, Price, Product, ProductId, Rating, ShippingPolicy,
    Storefront, Wishlist,
};

/// A replayable shopping session with its expected outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub products: Vec<Product>,
    pub actions: Vec<Action>,
    pub expect: Expected,
}

/// The cart a scenario should end with.
#[derive(Debug, Clone, Deserialize)]
pub struct Expected {
    #[serde(default)]
    pub lines: Vec<ExpectedLine>,
    pub subtotal: Price,
    pub shipping_fee: Price,
    pub total: Price,
    /// Number of notices raised, if the scenario cares.
    pub notices: Option<usize>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ExpectedLine {
    pub product: ProductId,
    pub quantity: u32,
}

impl Scenario {
    /// A fresh session over this scenario's catalog with an empty wishlist,
    /// or the full demo session when no catalog is given.
    #[must_use]
    pub fn session(&self) -> Storefront<Vec<Notice>> {
        if self.products.is_empty() {
            return Storefront::new(Vec::new());
        }
        Storefront::from_parts(
            Catalog::new(self.products.clone()),
            Wishlist::new(),
            OrderHistory::new(Vec::new()),
            ShippingPolicy::default(),
            Vec::new(),
        )
    }
}

/// Parse a scenario file.
///
/// # Errors
///
/// Returns the YAML error if the document doesn't describe scenarios.
pub fn load_scenarios(yaml: &str) -> Result<Vec<Scenario>, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// A four-star test product priced in cents.
///
/// # Panics
///
/// Never in practice; the rating is fixed at four stars.
#[must_use]
pub fn product(id: i32, name: &str, cents: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents),
        image: format!("{}.jpg", name.to_lowercase().replace(' ', "-")),
        rating: Rating::new(4).expect("4 is a valid rating"),
        category: "Test".to_owned(),
    }
}
