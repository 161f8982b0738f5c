//! Personalized product recommendations for the storefront's For You page.
//!
//! Given a read-only catalog snapshot and one shopper's own activity (cart,
//! wishlist, order history), the engine aggregates the activity into a
//! per-request preference profile, scores every catalog product against it,
//! and returns a bounded, deduplicated, deterministically ordered list.
//! Anonymous visitors and shoppers with no usable signal get a fallback
//! ranking instead.
//!
//! The crate is a pure in-process library: no I/O, no shared mutable state,
//! no caching across calls. Fetching the catalog and activity documents is
//! the caller's responsibility and happens before invocation.

pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use config::{FallbackPolicy, RecommendOptions, SignalWeights};
pub use engine::{
    activity_overview, aggregate, fallback, recommend, revisit_favorites, score, select,
    ActivityProduct, ScoredCandidate,
};
pub use error::{EngineError, EngineResult};
pub use models::{
    ActivityRecord, Order, OrderItem, PreferenceProfile, Product, UserActivity,
};
