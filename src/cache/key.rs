//! Cache Key Module
//!
//! Deterministic cache-key construction for filtered lookups.

use serde_json::{Map, Value};

// == Make Key ==
/// Builds a cache key from a namespace and a filter map.
///
/// Filter field names are sorted lexicographically and joined as
/// `field=JSON(value)` pairs, so two logically identical filter maps
/// produce the same key regardless of field order.
///
/// # Examples
/// `make_key("products", {category: "tools", in_stock: true})` yields
/// `products:category="tools"&in_stock=true`.
pub fn make_key(namespace: &str, filters: &Map<String, Value>) -> String {
    let mut fields: Vec<(&String, &Value)> = filters.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let pairs: Vec<String> = fields
        .into_iter()
        .map(|(field, value)| {
            // Serializing a Value cannot fail.
            let encoded =
                serde_json::to_string(value).unwrap_or_else(|_| "null".to_string());
            format!("{}={}", field, encoded)
        })
        .collect();

    format!("{}:{}", namespace, pairs.join("&"))
}
