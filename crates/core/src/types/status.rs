//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Order fulfillment status as shown on the Orders page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Processing,
    InTransit,
    Delivered,
}

impl OrderStatus {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
        }
    }

    /// Returns true once the order has left the warehouse.
    #[must_use]
    pub const fn is_shipped(self) -> bool {
        matches!(self, Self::InTransit | Self::Delivered)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" | "Processing" => Ok(Self::Processing),
            "in_transit" | "In Transit" => Ok(Self::InTransit),
            "delivered" | "Delivered" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Category of a customer care issue report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Order Issue
    Order,
    /// Payment Issue
    Payment,
    /// Product Quality
    Product,
    /// Delivery Issue
    Delivery,
    Other,
}

impl IssueType {
    /// All issue types in the order the report form lists them.
    pub const ALL: [Self; 5] = [
        Self::Order,
        Self::Payment,
        Self::Product,
        Self::Delivery,
        Self::Other,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Order => "Order Issue",
            Self::Payment => "Payment Issue",
            Self::Product => "Product Quality",
            Self::Delivery => "Delivery Issue",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Order => write!(f, "order"),
            Self::Payment => write!(f, "payment"),
            Self::Product => write!(f, "product"),
            Self::Delivery => write!(f, "delivery"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for IssueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "order" => Ok(Self::Order),
            "payment" => Ok(Self::Payment),
            "product" => Ok(Self::Product),
            "delivery" => Ok(Self::Delivery),
            "other" => Ok(Self::Other),
            _ => Err(format!("invalid issue type: {s}")),
        }
    }
}
