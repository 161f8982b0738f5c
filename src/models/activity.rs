use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EngineError, EngineResult};

/// One line item inside a completed order
///
/// Order documents carry more fields (size, quantity, fulfillment status);
/// only the product reference matters for preference aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(alias = "_id")]
    pub product_id: String,
}

/// A completed order with its line items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// Placement time. Orders migrated from the legacy store can miss it.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// A user's raw shopping activity, fetched fresh by the caller per request
///
/// The engine never caches this across requests; an unauthenticated caller
/// has no activity at all and passes `None` to the pipeline instead of an
/// empty value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    /// productId -> variant key (size) -> quantity
    #[serde(default)]
    pub cart_items: HashMap<String, HashMap<String, u32>>,

    /// productId -> presence flag
    #[serde(default)]
    pub wishlist_items: HashMap<String, bool>,

    #[serde(default)]
    pub orders: Vec<Order>,
}

/// A single tagged activity signal, ready for aggregation
///
/// The three document shapes are collapsed into explicit variants once at the
/// boundary so the scoring core never duck-types its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityRecord {
    Cart { product_id: String },
    Wishlist { product_id: String },
    OrderLine { product_id: String },
}

impl ActivityRecord {
    pub fn product_id(&self) -> &str {
        match self {
            ActivityRecord::Cart { product_id }
            | ActivityRecord::Wishlist { product_id }
            | ActivityRecord::OrderLine { product_id } => product_id,
        }
    }
}

impl UserActivity {
    /// Validates a loosely-shaped activity document from the store's database.
    ///
    /// Individual malformed entries (a cart variant map that is not an
    /// object, a non-boolean wishlist flag, an order item without a product
    /// reference) are skipped rather than failing the whole computation;
    /// partial signal is better than none. Only a payload that is not an
    /// object at the top level is rejected.
    pub fn from_value(value: &Value) -> EngineResult<Self> {
        let root = value.as_object().ok_or_else(|| {
            EngineError::InvalidActivity("activity payload is not an object".to_string())
        })?;

        let mut activity = UserActivity::default();

        if let Some(entries) = root.get("cartItems").and_then(Value::as_object) {
            for (product_id, variants) in entries {
                let Some(variants) = variants.as_object() else {
                    tracing::debug!(
                        product_id = product_id.as_str(),
                        "Skipping cart entry with non-object variant map"
                    );
                    continue;
                };

                let mut quantities = HashMap::new();
                for (variant, quantity) in variants {
                    match quantity.as_u64() {
                        Some(quantity) if quantity >= 1 => {
                            quantities.insert(variant.clone(), quantity as u32);
                        }
                        _ => tracing::debug!(
                            product_id = product_id.as_str(),
                            variant = variant.as_str(),
                            "Skipping cart variant without a positive integer quantity"
                        ),
                    }
                }

                if !quantities.is_empty() {
                    activity.cart_items.insert(product_id.clone(), quantities);
                }
            }
        }

        if let Some(entries) = root.get("wishlistItems").and_then(Value::as_object) {
            for (product_id, flag) in entries {
                match flag.as_bool() {
                    Some(present) => {
                        activity.wishlist_items.insert(product_id.clone(), present);
                    }
                    None => tracing::debug!(
                        product_id = product_id.as_str(),
                        "Skipping wishlist entry with non-boolean flag"
                    ),
                }
            }
        }

        if let Some(orders) = root.get("orders").and_then(Value::as_array) {
            for order in orders {
                let Some(order) = order.as_object() else {
                    tracing::debug!("Skipping non-object order");
                    continue;
                };

                let mut items = Vec::new();
                if let Some(entries) = order.get("items").and_then(Value::as_array) {
                    for item in entries {
                        // Legacy order documents reference the product as `_id`
                        let product_id = item
                            .get("productId")
                            .or_else(|| item.get("_id"))
                            .and_then(Value::as_str);
                        match product_id {
                            Some(product_id) => items.push(OrderItem {
                                product_id: product_id.to_string(),
                            }),
                            None => {
                                tracing::debug!("Skipping order item without a product reference")
                            }
                        }
                    }
                }

                let date = order
                    .get("date")
                    .and_then(Value::as_i64)
                    .and_then(|millis| Utc.timestamp_millis_opt(millis).single());

                activity.orders.push(Order { items, date });
            }
        }

        Ok(activity)
    }

    /// Flattens the three collections into tagged records.
    ///
    /// One `OrderLine` is emitted per line-item occurrence, so ordering the
    /// same product twice contributes twice. Emission order is deterministic
    /// (sorted cart and wishlist ids, orders in stored sequence), though the
    /// aggregator never depends on it.
    pub fn records(&self) -> Vec<ActivityRecord> {
        let mut records = Vec::new();

        let mut cart_ids: Vec<&String> = self.cart_items.keys().collect();
        cart_ids.sort();
        records.extend(cart_ids.into_iter().map(|id| ActivityRecord::Cart {
            product_id: id.clone(),
        }));

        let mut wishlist_ids: Vec<&String> = self
            .wishlist_items
            .iter()
            .filter(|(_, present)| **present)
            .map(|(id, _)| id)
            .collect();
        wishlist_ids.sort();
        records.extend(wishlist_ids.into_iter().map(|id| ActivityRecord::Wishlist {
            product_id: id.clone(),
        }));

        for order in &self.orders {
            records.extend(order.items.iter().map(|item| ActivityRecord::OrderLine {
                product_id: item.product_id.clone(),
            }));
        }

        records
    }

    /// True when there is no cart, wishlist, or order signal at all
    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
            && self.wishlist_items.is_empty()
            && self.orders.iter().all(|order| order.items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_well_formed() {
        let activity = UserActivity::from_value(&json!({
            "cartItems": { "p_1": { "M": 2, "L": 1 } },
            "wishlistItems": { "p_2": true },
            "orders": [
                { "items": [{ "_id": "p_3" }], "date": 1716239022000i64 }
            ]
        }))
        .unwrap();

        assert_eq!(activity.cart_items["p_1"]["M"], 2);
        assert_eq!(activity.wishlist_items["p_2"], true);
        assert_eq!(activity.orders.len(), 1);
        assert_eq!(activity.orders[0].items[0].product_id, "p_3");
        assert!(activity.orders[0].date.is_some());
    }

    #[test]
    fn test_from_value_rejects_non_object_payload() {
        assert!(UserActivity::from_value(&json!("not an object")).is_err());
        assert!(UserActivity::from_value(&json!(null)).is_err());
    }

    #[test]
    fn test_from_value_skips_malformed_cart_entries() {
        let activity = UserActivity::from_value(&json!({
            "cartItems": {
                "p_bad": "not a variant map",
                "p_zero": { "M": 0 },
                "p_ok": { "S": 1, "M": "two" }
            }
        }))
        .unwrap();

        // The broken entries drop out, the valid variant survives
        assert_eq!(activity.cart_items.len(), 1);
        assert_eq!(activity.cart_items["p_ok"].len(), 1);
        assert_eq!(activity.cart_items["p_ok"]["S"], 1);
    }

    #[test]
    fn test_from_value_skips_non_boolean_wishlist_flags() {
        let activity = UserActivity::from_value(&json!({
            "wishlistItems": { "p_1": true, "p_2": "yes", "p_3": 1 }
        }))
        .unwrap();

        assert_eq!(activity.wishlist_items.len(), 1);
        assert!(activity.wishlist_items["p_1"]);
    }

    #[test]
    fn test_from_value_tolerates_legacy_orders() {
        let activity = UserActivity::from_value(&json!({
            "orders": [
                { "items": [{ "_id": "p_1" }, { "name": "no id" }] },
                { "date": 1716239022000i64 },
                "not an order"
            ]
        }))
        .unwrap();

        assert_eq!(activity.orders.len(), 2);
        assert_eq!(activity.orders[0].items.len(), 1);
        assert!(activity.orders[0].date.is_none());
        assert!(activity.orders[1].items.is_empty());
    }

    #[test]
    fn test_records_emits_one_order_line_per_occurrence() {
        let activity = UserActivity::from_value(&json!({
            "cartItems": { "p_1": { "M": 3 } },
            "wishlistItems": { "p_2": true, "p_gone": false },
            "orders": [
                { "items": [{ "_id": "p_3" }, { "_id": "p_3" }] }
            ]
        }))
        .unwrap();

        let records = activity.records();
        assert_eq!(records.len(), 4);
        // Cart quantity does not multiply the signal, order repetition does
        assert_eq!(
            records
                .iter()
                .filter(|r| matches!(r, ActivityRecord::Cart { .. }))
                .count(),
            1
        );
        assert_eq!(
            records
                .iter()
                .filter(|r| matches!(r, ActivityRecord::OrderLine { product_id } if product_id == "p_3"))
                .count(),
            2
        );
        // A cleared wishlist flag is well-formed absence, not a signal
        assert!(!records
            .iter()
            .any(|r| matches!(r, ActivityRecord::Wishlist { product_id } if product_id == "p_gone")));
    }

    #[test]
    fn test_is_empty() {
        assert!(UserActivity::default().is_empty());

        let only_empty_orders = UserActivity {
            orders: vec![Order {
                items: vec![],
                date: None,
            }],
            ..Default::default()
        };
        assert!(only_empty_orders.is_empty());

        let with_cart = UserActivity::from_value(&json!({
            "cartItems": { "p_1": { "M": 1 } }
        }))
        .unwrap();
        assert!(!with_cart.is_empty());
    }
}
