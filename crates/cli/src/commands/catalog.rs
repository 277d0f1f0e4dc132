//! Read-only listings: products, orders and the wishlist.

use shophub_core::{Notifier, Product, SortOrder, Storefront};
use tracing::info;

/// List catalog products.
pub fn products<N: Notifier>(
    store: &Storefront<N>,
    sort: SortOrder,
    featured: bool,
    search: Option<&str>,
) {
    let listed: Vec<&Product> = if featured {
        store.catalog().featured().iter().collect()
    } else if let Some(query) = search {
        store.catalog().search(query)
    } else {
        store.catalog().sorted(sort)
    };

    info!(count = listed.len(), sort = %sort, "Products");
    for product in listed {
        info!(
            id = %product.id,
            price = %product.price,
            rating = %product.rating,
            category = %product.category,
            "  {}",
            product.name
        );
    }
}

/// List past orders.
pub fn orders<N: Notifier>(store: &Storefront<N>) {
    info!(count = store.orders().len(), "Order history");
    for order in store.orders().orders() {
        info!(
            number = %order.number,
            placed_on = %order.placed_on,
            status = %order.status,
            items = order.item_count(),
            total = %order.total,
            "  {}",
            order.number
        );
        for line in &order.lines {
            info!("    {} x{} @ {}", line.name, line.quantity, line.unit_price);
        }
    }
}

/// List saved products.
pub fn wishlist<N: Notifier>(store: &Storefront<N>) {
    let count = store.wishlist().len();
    if count == 0 {
        info!("Your wishlist is empty");
        return;
    }

    let noun = if count == 1 { "item" } else { "items" };
    info!("{count} {noun} saved");
    for product in store.wishlist().items() {
        info!(id = %product.id, price = %product.price, "  {}", product.name);
    }
}
