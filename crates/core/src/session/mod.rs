//! Per-session storefront state.
//!
//! A [`Storefront`] owns everything one shopper's session touches: the
//! catalog, their cart, wishlist and order history, plus the [`Notifier`]
//! that surfaces confirmations. There is no shared or global state; each
//! session (and each test) builds its own value and drops it when done.
//!
//! Cart mutations follow the ledger's rules: operations on products that
//! aren't in the cart are silent no-ops. Only lookups against the catalog or
//! wishlist can fail, with a [`StorefrontError`].

mod script;

use serde::Serialize;
use thiserror::Error;

pub use script::Action;

use crate::cart::{CartLedger, CartTotals, LineItem, ShippingPolicy};
use crate::catalog::{Catalog, Product};
use crate::forms::{
    ContactForm, ContactMessage, FieldErrors, IssueReport, IssueReportForm, validate_chat_message,
};
use crate::notify::{Notice, Notifier};
use crate::orders::OrderHistory;
use crate::types::{ProductId, Quantity};
use crate::wishlist::{Wishlist, WishlistChange};

const FORM_ERRORS_TITLE: &str = "Please fix the errors in the form";

/// Errors raised by storefront operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorefrontError {
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
    #[error("Product {0} is not on the wishlist")]
    NotInWishlist(ProductId),
}

/// Snapshot of the cart for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<LineItem>,
    pub totals: CartTotals,
}

impl CartSummary {
    /// "1 item" / "3 items", counting distinct lines.
    #[must_use]
    pub fn item_label(&self) -> String {
        match self.lines.len() {
            1 => "1 item".to_owned(),
            n => format!("{n} items"),
        }
    }

    /// "Add $15.00 more for free shipping", when applicable.
    #[must_use]
    pub fn free_shipping_hint(&self) -> Option<String> {
        self.totals
            .amount_until_free_shipping()
            .map(|remaining| format!("Add {remaining} more for free shipping"))
    }
}

/// One shopper's storefront session.
#[derive(Debug)]
pub struct Storefront<N> {
    catalog: Catalog,
    cart: CartLedger,
    wishlist: Wishlist,
    orders: OrderHistory,
    notifier: N,
}

impl<N: Notifier> Storefront<N> {
    /// A session over the demo data with the default shipping policy.
    #[must_use]
    pub fn new(notifier: N) -> Self {
        Self::with_policy(ShippingPolicy::default(), notifier)
    }

    /// A session over the demo data with a custom shipping policy.
    #[must_use]
    pub fn with_policy(policy: ShippingPolicy, notifier: N) -> Self {
        let catalog = Catalog::demo();
        let wishlist = Wishlist::demo(&catalog);
        Self::from_parts(catalog, wishlist, OrderHistory::demo(), policy, notifier)
    }

    /// A session over explicit data. The cart always starts empty.
    #[must_use]
    pub fn from_parts(
        catalog: Catalog,
        wishlist: Wishlist,
        orders: OrderHistory,
        policy: ShippingPolicy,
        notifier: N,
    ) -> Self {
        Self {
            catalog,
            cart: CartLedger::with_policy(policy),
            wishlist,
            orders,
            notifier,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &CartLedger {
        &self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    #[must_use]
    pub const fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    #[must_use]
    pub fn into_notifier(self) -> N {
        self.notifier
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add a catalog product to the cart, merging with an existing line.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::UnknownProduct`] if the catalog has no such product.
    pub fn add_to_cart(
        &mut self,
        product_id: ProductId,
        quantity: Quantity,
    ) -> Result<Quantity, StorefrontError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(StorefrontError::UnknownProduct(product_id))?;
        let resulting = self.cart.add_or_increment(product, quantity);
        self.notifier.notify(added_to_cart(product));
        Ok(resulting)
    }

    /// The cart page's "+" button.
    pub fn increment(&mut self, product_id: ProductId) -> Option<Quantity> {
        self.cart.adjust_quantity(product_id, 1)
    }

    /// The cart page's "-" button. Never drops below one.
    pub fn decrement(&mut self, product_id: ProductId) -> Option<Quantity> {
        self.cart.adjust_quantity(product_id, -1)
    }

    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> Option<Quantity> {
        self.cart.set_quantity(product_id, quantity)
    }

    /// Remove a line from the cart, notifying only if something was removed.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Option<LineItem> {
        let removed = self.cart.remove(product_id)?;
        self.notifier.notify(Notice::success(
            "Item removed",
            format!("{} has been removed from your cart.", removed.name),
        ));
        Some(removed)
    }

    /// Current lines and totals.
    #[must_use]
    pub fn cart_summary(&self) -> CartSummary {
        CartSummary {
            lines: self.cart.items().to_vec(),
            totals: self.cart.compute_totals(),
        }
    }

    /// Reset the cart to empty.
    pub fn end_session(&mut self) {
        self.cart.clear();
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// The product card's heart button.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::UnknownProduct`] if the catalog has no such product.
    pub fn toggle_wishlist(
        &mut self,
        product_id: ProductId,
    ) -> Result<WishlistChange, StorefrontError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(StorefrontError::UnknownProduct(product_id))?;
        let change = self.wishlist.toggle(product);
        let notice = match change {
            WishlistChange::Added => Notice::success(
                "Added to wishlist!",
                format!("{} has been added to your wishlist.", product.name),
            ),
            WishlistChange::Removed => removed_from_wishlist(product),
        };
        self.notifier.notify(notice);
        Ok(change)
    }

    /// Remove a saved product, notifying only if something was removed.
    pub fn remove_from_wishlist(&mut self, product_id: ProductId) -> Option<Product> {
        let removed = self.wishlist.remove(product_id)?;
        self.notifier.notify(removed_from_wishlist(&removed));
        Some(removed)
    }

    /// The wishlist page's "Add to Cart". The product stays on the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotInWishlist`] if the product isn't saved.
    pub fn add_wishlist_item_to_cart(
        &mut self,
        product_id: ProductId,
    ) -> Result<Quantity, StorefrontError> {
        let product = self
            .wishlist
            .get(product_id)
            .ok_or(StorefrontError::NotInWishlist(product_id))?;
        let resulting = self.cart.add_or_increment(product, Quantity::ONE);
        self.notifier.notify(added_to_cart(product));
        Ok(resulting)
    }

    // =========================================================================
    // Forms
    // =========================================================================

    /// Validate and "send" the contact form.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors if validation fails.
    pub fn submit_contact(&mut self, form: &ContactForm) -> Result<ContactMessage, FieldErrors> {
        let result = form.validate();
        self.notifier.notify(match &result {
            Ok(_) => Notice::success(
                "Message sent successfully!",
                "We'll get back to you as soon as possible.",
            ),
            Err(_) => Notice::error(FORM_ERRORS_TITLE),
        });
        result
    }

    /// Validate and file a customer care issue report.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors if validation fails.
    pub fn report_issue(&mut self, form: &IssueReportForm) -> Result<IssueReport, FieldErrors> {
        let result = form.validate();
        self.notifier.notify(match &result {
            Ok(_) => Notice::success(
                "Issue reported successfully!",
                "We'll investigate and get back to you soon.",
            ),
            Err(_) => Notice::error(FORM_ERRORS_TITLE),
        });
        result
    }

    /// Send a live-chat message.
    ///
    /// # Errors
    ///
    /// Returns a `message` field error if the input is blank.
    pub fn send_chat(&mut self, message: &str) -> Result<String, FieldErrors> {
        let result = validate_chat_message(message);
        self.notifier.notify(match &result {
            Ok(_) => Notice::success("Message sent!", "Our team will respond shortly."),
            Err(_) => Notice::error("Please enter a message"),
        });
        result
    }
}

fn added_to_cart(product: &Product) -> Notice {
    Notice::success(
        "Added to cart!",
        format!("{} has been added to your cart.", product.name),
    )
}

fn removed_from_wishlist(product: &Product) -> Notice {
    Notice::success(
        "Removed from wishlist",
        format!("{} has been removed from your wishlist.", product.name),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notify::NoticeLevel;
    use crate::types::Price;

    fn session() -> Storefront<Vec<Notice>> {
        Storefront::new(Vec::new())
    }

    fn id(n: i32) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_new_session_starts_with_empty_cart() {
        let store = session();
        assert!(store.cart().is_empty());
        assert_eq!(store.catalog().len(), 8);
        assert_eq!(store.wishlist().len(), 3);
        assert_eq!(store.orders().len(), 3);
        assert!(store.notifier().is_empty());
    }

    #[test]
    fn test_add_to_cart_notifies() {
        let mut store = session();
        assert_eq!(store.add_to_cart(id(6), Quantity::ONE), Ok(Quantity::ONE));

        let notices = store.into_notifier();
        assert_eq!(
            notices,
            vec![Notice::success(
                "Added to cart!",
                "Wireless Earbuds Pro has been added to your cart."
            )]
        );
    }

    #[test]
    fn test_add_unknown_product_fails_without_notice() {
        let mut store = session();
        assert_eq!(
            store.add_to_cart(id(42), Quantity::ONE),
            Err(StorefrontError::UnknownProduct(id(42)))
        );
        assert!(store.cart().is_empty());
        assert!(store.notifier().is_empty());
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut store = session();
        store.add_to_cart(id(1), Quantity::ONE).unwrap();
        assert_eq!(store.increment(id(1)).map(Quantity::get), Some(2));
        assert_eq!(store.decrement(id(1)).map(Quantity::get), Some(1));
        assert_eq!(store.decrement(id(1)).map(Quantity::get), Some(1));
        assert_eq!(store.increment(id(2)), None);
    }

    #[test]
    fn test_remove_notifies_once() {
        let mut store = session();
        store.add_to_cart(id(3), Quantity::ONE).unwrap();
        assert!(store.remove_from_cart(id(3)).is_some());
        assert!(store.remove_from_cart(id(3)).is_none());

        let notices = store.into_notifier();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices.last().map(|n| n.title.as_str()), Some("Item removed"));
    }

    #[test]
    fn test_toggle_wishlist() {
        let mut store = session();
        assert_eq!(store.toggle_wishlist(id(1)), Ok(WishlistChange::Removed));
        assert_eq!(store.toggle_wishlist(id(1)), Ok(WishlistChange::Added));
        assert_eq!(
            store.toggle_wishlist(id(0)),
            Err(StorefrontError::UnknownProduct(id(0)))
        );

        let titles: Vec<String> = store.into_notifier().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["Removed from wishlist", "Added to wishlist!"]);
    }

    #[test]
    fn test_add_wishlist_item_to_cart_keeps_it_saved() {
        let mut store = session();
        store.add_wishlist_item_to_cart(id(4)).unwrap();
        assert_eq!(store.add_wishlist_item_to_cart(id(4)).map(Quantity::get), Ok(2));
        assert!(store.wishlist().contains(id(4)));
        assert_eq!(store.cart().len(), 1);
        assert_eq!(
            store.add_wishlist_item_to_cart(id(2)),
            Err(StorefrontError::NotInWishlist(id(2)))
        );
    }

    #[test]
    fn test_cart_summary_labels() {
        let mut store = session();
        assert_eq!(store.cart_summary().item_label(), "0 items");
        assert_eq!(store.cart_summary().free_shipping_hint(), None);

        store.add_to_cart(id(1), Quantity::ONE).unwrap();
        let summary = store.cart_summary();
        assert_eq!(summary.item_label(), "1 item");
        assert_eq!(summary.totals.total, Price::from_cents(19_999));
        assert!(summary.totals.has_free_shipping());
    }

    #[test]
    fn test_free_shipping_hint_with_custom_policy() {
        let policy = ShippingPolicy::new(Price::from_dollars(500), Price::from_cents(999));
        let mut store = Storefront::with_policy(policy, Vec::<Notice>::new());
        store.add_to_cart(id(6), Quantity::ONE).unwrap();
        assert_eq!(
            store.cart_summary().free_shipping_hint().as_deref(),
            Some("Add $350.01 more for free shipping")
        );
    }

    #[test]
    fn test_end_session_resets_cart() {
        let mut store = session();
        store.add_to_cart(id(1), Quantity::ONE).unwrap();
        store.end_session();
        assert!(store.cart().is_empty());
        assert_eq!(store.wishlist().len(), 3);
    }

    #[test]
    fn test_forms_notify_outcome() {
        let mut store = session();
        assert!(store.submit_contact(&ContactForm::default()).is_err());
        assert!(store.send_chat("hi there").is_ok());
        assert!(store.report_issue(&IssueReportForm::default()).is_err());

        let levels: Vec<NoticeLevel> = store.into_notifier().iter().map(|n| n.level).collect();
        assert_eq!(
            levels,
            vec![NoticeLevel::Error, NoticeLevel::Success, NoticeLevel::Error]
        );
    }
}
