use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Product, UserActivity};

/// A product from the user's own history, tagged with how they touched it
///
/// Drives the For You page's activity badges (wishlist, cart, ordered).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProduct {
    pub product: Product,
    pub in_cart: bool,
    pub in_wishlist: bool,
    pub ordered: bool,
}

/// Wishlist products resolved against the catalog, for the "revisit your
/// favorites" shelf.
///
/// Returned in catalog order and truncated to `limit`; wishlisted ids no
/// longer present in the catalog drop out.
pub fn revisit_favorites(
    catalog: &[Product],
    activity: &UserActivity,
    limit: usize,
) -> Vec<Product> {
    let wishlisted: HashSet<&str> = activity
        .wishlist_items
        .iter()
        .filter(|(_, present)| **present)
        .map(|(id, _)| id.as_str())
        .collect();

    catalog
        .iter()
        .filter(|product| wishlisted.contains(product.id.as_str()))
        .take(limit)
        .cloned()
        .collect()
}

/// Every product the user has touched through cart, wishlist, or a past
/// order, in catalog order, each tagged for display.
pub fn activity_overview(catalog: &[Product], activity: &UserActivity) -> Vec<ActivityProduct> {
    let ordered: HashSet<&str> = activity
        .orders
        .iter()
        .flat_map(|order| order.items.iter())
        .map(|item| item.product_id.as_str())
        .collect();

    catalog
        .iter()
        .filter_map(|product| {
            let in_cart = activity.cart_items.contains_key(&product.id);
            let in_wishlist = activity
                .wishlist_items
                .get(&product.id)
                .copied()
                .unwrap_or(false);
            let was_ordered = ordered.contains(product.id.as_str());

            (in_cart || in_wishlist || was_ordered).then(|| ActivityProduct {
                product: product.clone(),
                in_cart,
                in_wishlist,
                ordered: was_ordered,
            })
        })
        .collect()
}
