use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Per-signal weight increments used by the activity aggregator.
///
/// Cart entries signal the strongest near-term purchase intent, a completed
/// order line sits in between, and a wishlist entry is the weakest signal.
/// The constants are deliberately overridable per call rather than hard-wired.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignalWeights {
    #[serde(default = "default_cart_weight")]
    pub cart: f64,

    #[serde(default = "default_wishlist_weight")]
    pub wishlist: f64,

    #[serde(default = "default_order_line_weight")]
    pub order_line: f64,
}

fn default_cart_weight() -> f64 {
    2.0
}

fn default_wishlist_weight() -> f64 {
    1.0
}

fn default_order_line_weight() -> f64 {
    1.5
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            cart: default_cart_weight(),
            wishlist: default_wishlist_weight(),
            order_line: default_order_line_weight(),
        }
    }
}

impl SignalWeights {
    fn validate(&self) -> EngineResult<()> {
        for (name, value) in [
            ("cart", self.cart),
            ("wishlist", self.wishlist),
            ("orderLine", self.order_line),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidOptions(format!(
                    "{name} weight must be a finite non-negative number"
                )));
            }
        }
        Ok(())
    }
}

/// How to rank the catalog when there is no personalization signal.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Bestsellers first, then newest listings. Fully deterministic.
    Featured,
    /// Seeded shuffle of the whole catalog, reproducible per seed.
    Shuffle { seed: u64 },
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        FallbackPolicy::Featured
    }
}

/// Per-call recommendation options
///
/// Passed explicitly on every invocation; the engine keeps no global
/// configuration. Defaults match the storefront's For You page.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendOptions {
    /// Result-size cap
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Drop products already in the user's cart or wishlist
    #[serde(default = "default_exclude_interacted")]
    pub exclude_interacted: bool,

    /// Minimum relevance score a candidate must reach to be returned
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    #[serde(default)]
    pub weights: SignalWeights,

    #[serde(default)]
    pub fallback: FallbackPolicy,
}

fn default_max_results() -> usize {
    12
}

fn default_exclude_interacted() -> bool {
    true
}

fn default_min_score() -> f64 {
    0.1
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            exclude_interacted: default_exclude_interacted(),
            min_score: default_min_score(),
            weights: SignalWeights::default(),
            fallback: FallbackPolicy::default(),
        }
    }
}

impl RecommendOptions {
    /// Checks the options before the pipeline runs
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_results == 0 {
            return Err(EngineError::InvalidOptions(
                "maxResults must be at least 1".to_string(),
            ));
        }

        if !self.min_score.is_finite() || self.min_score < 0.0 {
            return Err(EngineError::InvalidOptions(
                "minScore must be a finite non-negative number".to_string(),
            ));
        }

        self.weights.validate()
    }
}
