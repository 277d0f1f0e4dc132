//! Product catalog.
//!
//! The storefront has no backend, so the catalog is a fixed list of demo
//! products. Listing pages sort and filter it but never mutate it.

use core::cmp::Reverse;
use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, ProductId};

/// Number of products shown in the Home page's featured row.
pub const FEATURED_COUNT: usize = 4;

/// Errors raised by catalog lookups and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("rating must be between 1 and 5 (got {0})")]
    InvalidRating(u8),
    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),
}

/// Star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    /// Create a rating.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRating`] outside `1..=5`.
    pub const fn new(stars: u8) -> Result<Self, CatalogError> {
        if stars >= 1 && stars <= Self::MAX {
            Ok(Self(stars))
        } else {
            Err(CatalogError::InvalidRating(stars))
        }
    }

    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

impl TryFrom<u8> for Rating {
    type Error = CatalogError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A product for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Opaque handle to the display image.
    pub image: String,
    pub rating: Rating,
    pub category: String,
}

/// Ordering for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Highest rated first.
    Rating,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [
        Self::Featured,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::Rating,
    ];

    /// Label shown in the sort dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::Rating => "Highest Rated",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Featured => write!(f, "featured"),
            Self::PriceLowToHigh => write!(f, "price-low"),
            Self::PriceHighToLow => write!(f, "price-high"),
            Self::Rating => write!(f, "rating"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-low" => Ok(Self::PriceLowToHigh),
            "price-high" => Ok(Self::PriceHighToLow),
            "rating" => Ok(Self::Rating),
            _ => Err(CatalogError::UnknownSortOrder(s.to_owned())),
        }
    }
}

/// The product catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a list of products, in display order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The demo catalog shown on the Products page.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(vec![
            demo_product(1, "Premium Wireless Headphones", 19_999, "product-headphones.jpg", 5, "Audio"),
            demo_product(2, "Latest Smartphone Pro", 89_999, "product-phone.jpg", 5, "Electronics"),
            demo_product(3, "Ultra-Thin Laptop", 129_999, "product-laptop.jpg", 4, "Computers"),
            demo_product(4, "Smart Watch Series X", 39_999, "product-watch.jpg", 4, "Wearables"),
            demo_product(5, "Professional DSLR Camera", 149_999, "product-camera.jpg", 5, "Photography"),
            demo_product(6, "Wireless Earbuds Pro", 14_999, "product-earbuds.jpg", 4, "Audio"),
            demo_product(7, "Gaming Laptop Ultra", 179_999, "product-laptop.jpg", 5, "Computers"),
            demo_product(8, "Fitness Smart Watch", 29_999, "product-watch.jpg", 4, "Wearables"),
        ])
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products for the Home page's featured row.
    #[must_use]
    pub fn featured(&self) -> &[Product] {
        let end = self.products.len().min(FEATURED_COUNT);
        self.products.get(..end).unwrap_or_default()
    }

    /// Products in the requested order. Ties keep catalog order.
    #[must_use]
    pub fn sorted(&self, order: SortOrder) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.iter().collect();
        match order {
            SortOrder::Featured => {}
            SortOrder::PriceLowToHigh => products.sort_by_key(|p| p.price),
            SortOrder::PriceHighToLow => products.sort_by_key(|p| Reverse(p.price)),
            SortOrder::Rating => products.sort_by_key(|p| Reverse(p.rating)),
        }
        products
    }

    /// Case-insensitive match on product name or category.
    ///
    /// A blank query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

fn demo_product(
    id: i32,
    name: &str,
    cents: u32,
    image: &str,
    stars: u8,
    category: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents),
        image: format!("/assets/{image}"),
        rating: Rating(stars.clamp(1, Rating::MAX)),
        category: category.to_owned(),
    }
}
