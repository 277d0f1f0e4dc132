//! Value types shared across the storefront: ids, money, quantities,
//! emails and statuses.

pub mod email;
pub mod id;
pub mod price;
pub mod quantity;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::{Price, PriceError};
pub use quantity::Quantity;
pub use status::*;
