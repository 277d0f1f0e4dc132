//! ShopHub Core - Storefront domain library.
//!
//! This crate provides the logic behind the ShopHub storefront pages:
//! - `cart` - The cart ledger: line items, quantities, shipping and totals
//! - `catalog` - The mock product catalog with sorting and search
//! - `wishlist` - Saved products
//! - `orders` - Mock order history
//! - `forms` - Contact, issue report and support chat validation
//! - `session` - The owned per-session state tying everything together
//!
//! # Architecture
//!
//! The core crate contains only types and in-memory state - no I/O, no
//! rendering, no routing. User-facing messages go through the [`Notifier`]
//! trait so that callers decide how to surface them.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, quantities, emails and statuses
//! - [`cart`] - [`CartLedger`] and its pricing rules
//! - [`catalog`] - [`Catalog`] and [`Product`]
//! - [`wishlist`] - [`Wishlist`]
//! - [`orders`] - [`OrderHistory`]
//! - [`forms`] - Form validation with per-field errors
//! - [`notify`] - [`Notice`] and [`Notifier`]
//! - [`session`] - [`Storefront`] and scripted [`Action`]s

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod forms;
pub mod notify;
pub mod orders;
pub mod session;
pub mod types;
pub mod wishlist;

pub use cart::{CartLedger, CartTotals, LineItem, ShippingPolicy};
pub use catalog::{Catalog, CatalogError, Product, Rating, SortOrder};
pub use forms::{ContactForm, ContactMessage, FieldErrors, IssueReport, IssueReportForm};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use orders::{Order, OrderHistory, OrderLine, OrderNumber};
pub use session::{Action, CartSummary, Storefront, StorefrontError};
pub use types::*;
pub use wishlist::{Wishlist, WishlistChange};
