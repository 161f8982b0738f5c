use serde::{Deserialize, Serialize};

pub mod activity;
pub mod profile;

pub use activity::{ActivityRecord, Order, OrderItem, UserActivity};
pub use profile::PreferenceProfile;

/// Immutable catalog entry
///
/// The catalog snapshot is supplied by the product-listing subsystem and is
/// read-only here: ids are non-empty and unique, prices non-negative, both
/// validated upstream. Only `category` and `sub_category` feed the scoring
/// model; `bestseller` and `date` feed the featured fallback ranking, and the
/// rest is display metadata carried through for the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub sub_category: String,
    pub price: f64,

    /// Display image refs, irrelevant to scoring
    #[serde(default)]
    pub image: Vec<String>,

    /// Merchandising flag from the catalog
    #[serde(default)]
    pub bestseller: bool,

    /// Listing timestamp in epoch milliseconds, the catalog's recency signal
    #[serde(default)]
    pub date: i64,
}
