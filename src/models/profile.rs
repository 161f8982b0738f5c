use std::collections::{HashMap, HashSet};

/// Derived per-request preference aggregate
///
/// Rebuilt from scratch on every recommendation call and discarded with it;
/// nothing here is ever persisted or shared between requests. All accumulated
/// weights are non-negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceProfile {
    /// category -> accumulated affinity weight
    pub category_weight: HashMap<String, f64>,

    /// sub-category -> accumulated affinity weight
    pub subcategory_weight: HashMap<String, f64>,

    /// Products already in the cart or wishlist. Ordered products are
    /// deliberately absent: a repeat purchase is affinity, not satiation.
    pub excluded_ids: HashSet<String>,
}

impl PreferenceProfile {
    /// True when the activity contributed no usable signal, which routes the
    /// pipeline to the fallback ranking.
    pub fn is_empty(&self) -> bool {
        self.category_weight.is_empty() && self.subcategory_weight.is_empty()
    }
}
