//! Cart script replay.
//!
//! A script is a YAML list of shopper actions, replayed against a fresh
//! session. The resulting cart is reported line by line with its totals.
//!
//! ```yaml
//! - action: add
//!   product: 6
//!   quantity: 2
//! - action: wishlist_to_cart
//!   product: 4
//! - action: set_quantity
//!   product: 6
//!   quantity: 0
//! ```

use std::path::Path;

use shophub_core::{Action, CartSummary, Notifier, Storefront};
use tracing::{error, info};

/// Replay the actions in `path` and report the resulting cart.
///
/// # Errors
///
/// Returns an error if the file can't be read or parsed, or if an action
/// refers to a product the catalog or wishlist doesn't have.
pub async fn run_script<N: Notifier>(
    store: &mut Storefront<N>,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }

    info!(path = %path.display(), "Loading cart script");

    let content = tokio::fs::read_to_string(path).await?;
    let actions: Vec<Action> = serde_yaml::from_str(&content)?;

    info!(actions = actions.len(), "Parsed script");

    if let Err((index, e)) = store.apply_all(&actions) {
        error!(step = index + 1, "Script stopped: {e}");
        return Err(format!("Action {} failed: {e}", index + 1).into());
    }

    report(&store.cart_summary());
    Ok(())
}

fn report(summary: &CartSummary) {
    if summary.lines.is_empty() {
        info!("Your cart is empty");
        return;
    }

    info!("Shopping Cart ({})", summary.item_label());
    for line in &summary.lines {
        info!(
            id = %line.product_id,
            quantity = %line.quantity,
            unit_price = %line.unit_price,
            "  {} = {}",
            line.name,
            line.line_total()
        );
    }

    let totals = &summary.totals;
    info!("Subtotal: {}", totals.subtotal);
    if totals.has_free_shipping() {
        info!("Shipping: Free");
    } else {
        info!("Shipping: {}", totals.shipping_fee);
    }
    info!("Total: {}", totals.total);

    if let Some(hint) = summary.free_shipping_hint() {
        info!("{hint}");
    }
}
