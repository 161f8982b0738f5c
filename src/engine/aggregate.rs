use std::collections::HashMap;

use crate::{
    config::SignalWeights,
    models::{ActivityRecord, PreferenceProfile, Product},
};

/// Collapses tagged activity records into a preference profile.
///
/// Each record adds its signal weight to the referenced product's category
/// and sub-category accumulators. Cart and wishlist records also mark the
/// product as already interacted with; order lines never do, so a previously
/// purchased product stays eligible for recommendation. Records referencing
/// products missing from the snapshot (discontinued items) contribute
/// nothing, not even an exclusion.
///
/// Pure summation over the record set: permuting the records yields the same
/// profile.
pub fn aggregate(
    records: &[ActivityRecord],
    catalog: &[Product],
    weights: &SignalWeights,
) -> PreferenceProfile {
    let by_id: HashMap<&str, &Product> = catalog.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut profile = PreferenceProfile::default();

    for record in records {
        let Some(product) = by_id.get(record.product_id()) else {
            tracing::debug!(
                product_id = record.product_id(),
                "Skipping activity for product missing from catalog"
            );
            continue;
        };

        let weight = match record {
            ActivityRecord::Cart { .. } => weights.cart,
            ActivityRecord::Wishlist { .. } => weights.wishlist,
            ActivityRecord::OrderLine { .. } => weights.order_line,
        };

        *profile
            .category_weight
            .entry(product.category.clone())
            .or_insert(0.0) += weight;
        *profile
            .subcategory_weight
            .entry(product.sub_category.clone())
            .or_insert(0.0) += weight;

        if matches!(
            record,
            ActivityRecord::Cart { .. } | ActivityRecord::Wishlist { .. }
        ) {
            profile.excluded_ids.insert(product.id.clone());
        }
    }

    profile
}
