use crate::{
    config::RecommendOptions,
    engine::score::{score, ScoredCandidate},
    models::{PreferenceProfile, Product},
};

/// Ranks the catalog against a profile and returns the final bounded list.
///
/// Candidates are the catalog minus the already-interacted products when
/// `exclude_interacted` is set. Everything below `min_score` is filtered out,
/// the rest is ordered by descending score with catalog position breaking
/// ties, and the result is truncated to `max_results`. A fresh vector is
/// allocated per call; nothing is cached.
pub fn select(
    catalog: &[Product],
    profile: &PreferenceProfile,
    options: &RecommendOptions,
) -> Vec<Product> {
    let mut candidates: Vec<ScoredCandidate> = catalog
        .iter()
        .enumerate()
        .filter(|(_, product)| {
            !options.exclude_interacted || !profile.excluded_ids.contains(&product.id)
        })
        .map(|(position, product)| ScoredCandidate {
            product,
            score: score(product, profile),
            position,
        })
        .filter(|candidate| candidate.score >= options.min_score)
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.position.cmp(&b.position))
    });
    candidates.truncate(options.max_results);

    candidates
        .into_iter()
        .map(|candidate| candidate.product.clone())
        .collect()
}
