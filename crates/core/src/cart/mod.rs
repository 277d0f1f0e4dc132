//! Shopping cart.
//!
//! A [`CartLedger`] holds at most one [`LineItem`] per product and derives
//! its money totals on every read. Shipping rules live in [`ShippingPolicy`].

mod ledger;
mod shipping;

pub use ledger::{CartLedger, LineItem};
pub use shipping::{CartTotals, ShippingPolicy};
