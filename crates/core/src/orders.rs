//! Order history.
//!
//! Orders are read-only demo records; placing new orders is outside the
//! storefront's scope.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{OrderStatus, Price, Quantity};

/// Human-readable order reference, e.g. `ORD-2024-001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A purchased product within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub image: String,
    pub quantity: Quantity,
    pub unit_price: Price,
}

/// A past order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub number: OrderNumber,
    pub placed_on: NaiveDate,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    /// Amount charged, as recorded at purchase time.
    pub total: Price,
}

impl Order {
    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|l| u64::from(l.quantity.get()))
            .sum()
    }
}

/// The customer's orders, most recent last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    #[must_use]
    pub const fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// The demo history shown on the Orders page.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(vec![
            demo_order("ORD-2024-001", (2024, 1, 15), OrderStatus::Delivered, "Latest Smartphone Pro", "product-phone.jpg", 89_999),
            demo_order("ORD-2024-002", (2024, 1, 18), OrderStatus::InTransit, "Premium Wireless Headphones", "product-headphones.jpg", 19_999),
            demo_order("ORD-2024-003", (2024, 1, 20), OrderStatus::Processing, "Ultra-Thin Laptop", "product-laptop.jpg", 129_999),
        ])
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn get(&self, number: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.number.as_str() == number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

fn demo_order(
    number: &str,
    (year, month, day): (i32, u32, u32),
    status: OrderStatus,
    name: &str,
    image: &str,
    cents: u32,
) -> Order {
    let price = Price::from_cents(cents);
    Order {
        number: OrderNumber::new(number),
        placed_on: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        status,
        lines: vec![OrderLine {
            name: name.to_owned(),
            image: format!("/assets/{image}"),
            quantity: Quantity::ONE,
            unit_price: price,
        }],
        total: price,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_history() {
        let history = OrderHistory::demo();
        assert_eq!(history.len(), 3);

        let order = history.get("ORD-2024-002").unwrap();
        assert_eq!(order.status, OrderStatus::InTransit);
        assert_eq!(order.placed_on, NaiveDate::from_ymd_opt(2024, 1, 18).unwrap());
        assert_eq!(order.total.to_string(), "$199.99");
        assert_eq!(order.item_count(), 1);

        assert!(history.get("ORD-1999-000").is_none());
    }

    #[test]
    fn test_order_serializes_with_iso_date() {
        let history = OrderHistory::demo();
        let order = history.orders().first().unwrap();
        let json = serde_json::to_value(order).unwrap();
        assert_eq!(json["number"], "ORD-2024-001");
        assert_eq!(json["placed_on"], "2024-01-15");
        assert_eq!(json["status"], "delivered");
        assert_eq!(json["total"], "899.99");
    }
}
