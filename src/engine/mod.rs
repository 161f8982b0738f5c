use std::time::Instant;

use crate::{
    config::RecommendOptions,
    error::EngineResult,
    models::{Product, UserActivity},
};

pub mod activity_view;
pub mod aggregate;
pub mod fallback;
pub mod score;
pub mod select;

pub use activity_view::{activity_overview, revisit_favorites, ActivityProduct};
pub use aggregate::aggregate;
pub use fallback::fallback;
pub use score::{score, ScoredCandidate};
pub use select::select;

/// Runs the full recommendation pipeline for one request.
///
/// `activity` is `None` for unauthenticated callers. Both that case and an
/// activity set yielding no usable signal (for example, only discontinued
/// products) route to the fallback ranking instead of failing. The
/// computation is pure and synchronous: all inputs are already in memory,
/// identical inputs produce identical output, and concurrent calls share no
/// mutable state.
pub fn recommend(
    catalog: &[Product],
    activity: Option<&UserActivity>,
    options: &RecommendOptions,
) -> EngineResult<Vec<Product>> {
    options.validate()?;

    let start = Instant::now();
    tracing::info!(
        catalog_size = catalog.len(),
        authenticated = activity.is_some(),
        max_results = options.max_results,
        "Generating recommendations"
    );

    let recommendations = match activity {
        None => fallback::fallback(catalog, options.max_results, &options.fallback),
        Some(activity) => {
            let profile = aggregate::aggregate(&activity.records(), catalog, &options.weights);
            if profile.is_empty() {
                tracing::debug!("No usable activity signal, using fallback ranking");
                fallback::fallback(catalog, options.max_results, &options.fallback)
            } else {
                select::select(catalog, &profile, options)
            }
        }
    };

    tracing::info!(
        results = recommendations.len(),
        processing_time_ms = start.elapsed().as_millis() as u64,
        "Recommendations generated"
    );

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn product(id: &str, category: &str, sub_category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            price: 10.0,
            image: vec![],
            bestseller: false,
            date: 0,
        }
    }

    #[test]
    fn test_invalid_options_are_rejected_before_scoring() {
        let catalog = vec![product("p_1", "Shoes", "Sneakers")];
        let options = RecommendOptions {
            max_results: 0,
            ..Default::default()
        };

        let err = recommend(&catalog, None, &options).unwrap_err();
        assert!(matches!(err, EngineError::InvalidOptions(_)));
    }

    #[test]
    fn test_unauthenticated_caller_gets_fallback() {
        let catalog = vec![
            product("p_1", "Shoes", "Sneakers"),
            product("p_2", "Bags", "Totes"),
        ];

        let result = recommend(&catalog, None, &RecommendOptions::default()).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_activity_without_catalog_overlap_gets_fallback() {
        let catalog = vec![
            product("p_1", "Shoes", "Sneakers"),
            product("p_2", "Bags", "Totes"),
        ];
        let activity = UserActivity::from_value(&serde_json::json!({
            "cartItems": { "p_discontinued": { "M": 1 } }
        }))
        .unwrap();

        // The only signal references a product gone from the catalog, so the
        // profile is empty and the fallback ranking applies
        let result = recommend(&catalog, Some(&activity), &RecommendOptions::default()).unwrap();
        assert_eq!(result.len(), 2);
    }
}
