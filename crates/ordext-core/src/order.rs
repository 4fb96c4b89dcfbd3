//! Order records produced by the extraction engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Placeholder rendered when no order number could be resolved.
///
/// Downstream consumers key on this literal, so it is part of the output
/// contract rather than an internal detail.
pub const UNKNOWN_ORDER_NUMBER: &str = "UNKNOWN";

/// Placeholder vendor name rendered when the sender matched no registered
/// vendor domain.
pub const UNKNOWN_VENDOR: &str = "Unknown";

/// A single purchased item.
///
/// Only emitted when both quantity and unit price were resolvable for the
/// item, directly or derived; a candidate missing either field is dropped
/// before it reaches a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name or description, trimmed.
    pub name: String,
    pub quantity: u32,
    /// Per-unit price, carried at two fractional digits.
    pub unit_price: Decimal,
}

/// A normalized purchase order extracted from one email.
///
/// Immutable once constructed; ownership passes to the order-store
/// collaborator. `order_date` is the extraction timestamp — the engine does
/// not parse a date out of the email text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Extracted order identifier, or [`UNKNOWN_ORDER_NUMBER`].
    pub order_number: String,
    /// Detected vendor name, or [`UNKNOWN_VENDOR`].
    pub vendor: String,
    /// Order total; zero when unresolved (validators distinguish the two
    /// cases by vendor class).
    pub total: Decimal,
    pub items: Vec<LineItem>,
    pub order_date: DateTime<Utc>,
}

impl OrderRecord {
    /// Whether a real (non-sentinel) order number was extracted.
    #[must_use]
    pub fn has_order_number(&self) -> bool {
        self.order_number != UNKNOWN_ORDER_NUMBER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_order_number_is_not_real() {
        let record = OrderRecord {
            order_number: UNKNOWN_ORDER_NUMBER.to_string(),
            vendor: UNKNOWN_VENDOR.to_string(),
            total: Decimal::ZERO,
            items: vec![],
            order_date: Utc::now(),
        };
        assert!(!record.has_order_number());
    }

    #[test]
    fn decimal_fields_serialize_as_strings() {
        let item = LineItem {
            name: "Wireless Mouse".to_string(),
            quantity: 2,
            unit_price: "22.50".parse().unwrap(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["unit_price"], serde_json::json!("22.50"));
    }
}
