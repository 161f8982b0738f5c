use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{config::FallbackPolicy, models::Product};

/// Default ranking for callers with no personalization signal.
///
/// `Featured` puts bestsellers first and newer listings next, keeping the
/// anonymous landing list stable across requests; catalog position breaks the
/// remaining ties. `Shuffle` reproduces the storefront's shuffle-and-slice
/// behavior for anonymous visitors, seeded so a given seed always produces
/// the same order. A catalog smaller than `desired_count` is returned whole,
/// and an empty catalog yields an empty list, never an error.
pub fn fallback(catalog: &[Product], desired_count: usize, policy: &FallbackPolicy) -> Vec<Product> {
    let mut products: Vec<Product> = catalog.to_vec();

    match policy {
        FallbackPolicy::Featured => {
            // Stable sort, so equal keys keep catalog order
            products.sort_by(|a, b| b.bestseller.cmp(&a.bestseller).then(b.date.cmp(&a.date)));
        }
        FallbackPolicy::Shuffle { seed } => {
            let mut rng = StdRng::seed_from_u64(*seed);
            products.shuffle(&mut rng);
        }
    }

    products.truncate(desired_count);
    products
}
