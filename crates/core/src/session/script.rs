//! Scripted shopper actions.
//!
//! An [`Action`] is one user interaction, serialized as a map tagged by
//! `action`. Lists of actions are replayed against a [`Storefront`] to
//! reproduce a shopping session:
//!
//! ```yaml
//! - action: add
//!   product: 1
//!   quantity: 2
//! - action: decrement
//!   product: 1
//! - action: remove
//!   product: 1
//! ```

use serde::{Deserialize, Serialize};

use super::{Storefront, StorefrontError};
use crate::notify::Notifier;
use crate::types::{ProductId, Quantity};

/// One user interaction with the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Add {
        product: ProductId,
        #[serde(default)]
        quantity: Quantity,
    },
    Increment {
        product: ProductId,
    },
    Decrement {
        product: ProductId,
    },
    SetQuantity {
        product: ProductId,
        quantity: i64,
    },
    Remove {
        product: ProductId,
    },
    ToggleWishlist {
        product: ProductId,
    },
    RemoveFromWishlist {
        product: ProductId,
    },
    WishlistToCart {
        product: ProductId,
    },
    /// Empty the cart.
    Clear,
}

impl<N: Notifier> Storefront<N> {
    /// Perform one scripted action.
    ///
    /// # Errors
    ///
    /// Propagates catalog and wishlist lookup failures. Cart actions on
    /// products that aren't in the cart succeed without effect.
    pub fn apply(&mut self, action: &Action) -> Result<(), StorefrontError> {
        match *action {
            Action::Add { product, quantity } => {
                self.add_to_cart(product, quantity)?;
            }
            Action::Increment { product } => {
                self.increment(product);
            }
            Action::Decrement { product } => {
                self.decrement(product);
            }
            Action::SetQuantity { product, quantity } => {
                self.set_quantity(product, quantity);
            }
            Action::Remove { product } => {
                self.remove_from_cart(product);
            }
            Action::ToggleWishlist { product } => {
                self.toggle_wishlist(product)?;
            }
            Action::RemoveFromWishlist { product } => {
                self.remove_from_wishlist(product);
            }
            Action::WishlistToCart { product } => {
                self.add_wishlist_item_to_cart(product)?;
            }
            Action::Clear => self.end_session(),
        }
        Ok(())
    }

    /// Perform actions in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the index of the failing action with its error.
    pub fn apply_all<'a>(
        &mut self,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> Result<(), (usize, StorefrontError)> {
        for (index, action) in actions.into_iter().enumerate() {
            self.apply(action).map_err(|e| (index, e))?;
        }
        Ok(())
    }
}
