//! Shipping fee rules and cart totals.

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// Flat-fee shipping, waived above a subtotal threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Subtotals strictly above this ship for free.
    pub free_shipping_threshold: Price,
    /// Fee charged at or below the threshold.
    pub flat_fee: Price,
}

impl ShippingPolicy {
    /// Create a policy.
    #[must_use]
    pub const fn new(free_shipping_threshold: Price, flat_fee: Price) -> Self {
        Self {
            free_shipping_threshold,
            flat_fee,
        }
    }

    /// Shipping fee for a cart with the given subtotal.
    ///
    /// An empty cart ships nothing and pays nothing.
    #[must_use]
    pub fn fee_for(&self, subtotal: Price, is_empty: bool) -> Price {
        if is_empty || subtotal > self.free_shipping_threshold {
            Price::ZERO
        } else {
            self.flat_fee
        }
    }

    /// Derive full totals from a subtotal.
    #[must_use]
    pub fn totals(&self, subtotal: Price, is_empty: bool) -> CartTotals {
        let shipping_fee = self.fee_for(subtotal, is_empty);
        CartTotals {
            subtotal,
            shipping_fee,
            total: subtotal + shipping_fee,
            free_shipping_threshold: self.free_shipping_threshold,
        }
    }
}

impl Default for ShippingPolicy {
    /// $9.99 shipping, free over $50.
    fn default() -> Self {
        Self::new(Price::from_dollars(50), Price::from_cents(999))
    }
}

/// Money totals for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal: Price,
    pub shipping_fee: Price,
    pub total: Price,
    #[serde(skip)]
    free_shipping_threshold: Price,
}

impl CartTotals {
    /// Returns true if shipping is waived.
    #[must_use]
    pub const fn has_free_shipping(&self) -> bool {
        self.shipping_fee.is_zero()
    }

    /// How much more the customer must add before shipping is waived.
    ///
    /// `None` for an empty cart and once the subtotal reaches the threshold.
    #[must_use]
    pub fn amount_until_free_shipping(&self) -> Option<Price> {
        if self.subtotal.is_zero() || self.subtotal >= self.free_shipping_threshold {
            return None;
        }
        Some(self.free_shipping_threshold.saturating_sub(self.subtotal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.free_shipping_threshold, Price::from_dollars(50));
        assert_eq!(policy.flat_fee, Price::from_cents(999));
    }

    #[test]
    fn test_fee_waived_only_above_threshold() {
        let policy = ShippingPolicy::default();
        assert_eq!(
            policy.fee_for(Price::from_cents(4999), false),
            Price::from_cents(999)
        );
        assert_eq!(
            policy.fee_for(Price::from_dollars(50), false),
            Price::from_cents(999)
        );
        assert_eq!(policy.fee_for(Price::from_cents(5001), false), Price::ZERO);
    }

    #[test]
    fn test_empty_cart_pays_nothing() {
        let totals = ShippingPolicy::default().totals(Price::ZERO, true);
        assert_eq!(totals.subtotal, Price::ZERO);
        assert_eq!(totals.shipping_fee, Price::ZERO);
        assert_eq!(totals.total, Price::ZERO);
        assert_eq!(totals.amount_until_free_shipping(), None);
    }

    #[test]
    fn test_free_items_still_pay_shipping() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.fee_for(Price::ZERO, false), policy.flat_fee);

        let totals = policy.totals(Price::ZERO, false);
        assert_eq!(totals.shipping_fee, Price::from_cents(999));
        assert_eq!(totals.total, Price::from_cents(999));
        assert!(!totals.has_free_shipping());
    }

    #[test]
    fn test_totals_saturate_at_max() {
        let totals = ShippingPolicy::default().totals(Price::MAX, false);
        assert_eq!(totals.shipping_fee, Price::ZERO);
        assert_eq!(totals.total, Price::MAX);

        let pricey = ShippingPolicy::new(Price::MAX, Price::from_cents(999));
        assert_eq!(pricey.totals(Price::MAX, false).total, Price::MAX);
    }

    #[test]
    fn test_amount_until_free_shipping() {
        let policy = ShippingPolicy::default();
        let totals = policy.totals(Price::from_dollars(35), false);
        assert_eq!(
            totals.amount_until_free_shipping(),
            Some(Price::from_dollars(15))
        );

        let at_threshold = policy.totals(Price::from_dollars(50), false);
        assert!(!at_threshold.has_free_shipping());
        assert_eq!(at_threshold.amount_until_free_shipping(), None);
    }

    #[test]
    fn test_custom_policy() {
        let policy = ShippingPolicy::new(Price::from_dollars(100), Price::from_dollars(5));
        let totals = policy.totals(Price::from_dollars(60), false);
        assert_eq!(totals.shipping_fee, Price::from_dollars(5));
        assert_eq!(totals.total, Price::from_dollars(65));
    }
}
