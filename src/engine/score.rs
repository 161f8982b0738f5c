use crate::models::{PreferenceProfile, Product};

/// A catalog product with its computed relevance score
///
/// Never mutated once scored. `position` is the product's index in the
/// catalog snapshot and serves as the stable tie-break key during selection.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub product: &'a Product,
    pub score: f64,
    pub position: usize,
}

/// Relevance of a single product against a preference profile.
///
/// Purely additive: the category and sub-category affinities sum, with
/// missing keys contributing zero. Safe to call on any product, including
/// ones the selector excludes; a product with no affinity overlap scores
/// exactly 0.0 and is dropped by the minimum-score threshold rather than
/// special-cased here.
pub fn score(product: &Product, profile: &PreferenceProfile) -> f64 {
    let category = profile
        .category_weight
        .get(&product.category)
        .copied()
        .unwrap_or(0.0);
    let subcategory = profile
        .subcategory_weight
        .get(&product.sub_category)
        .copied()
        .unwrap_or(0.0);

    category + subcategory
}
