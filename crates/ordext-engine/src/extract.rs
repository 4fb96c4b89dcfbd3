//! Top-level extraction entry points.

use chrono::{DateTime, Utc};
use ordext_core::{ItemStrategy, OrderRecord, UNKNOWN_ORDER_NUMBER, UNKNOWN_VENDOR};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::registry::{Vendor, VendorRegistry};
use crate::validate::ValidationFailure;
use crate::{fields, items, validate};

/// Result of one extraction attempt.
///
/// Failure to extract a usable order is an expected outcome carried as
/// data; the engine never raises for it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseOutcome {
    /// The record passed its vendor class's validation.
    Order(OrderRecord),
    Rejected(Rejection),
}

impl ParseOutcome {
    /// The accepted record, if validation passed.
    #[must_use]
    pub fn into_order(self) -> Option<OrderRecord> {
        match self {
            ParseOutcome::Order(record) => Some(record),
            ParseOutcome::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, ParseOutcome::Rejected(_))
    }
}

/// A best-effort record that failed validation, with the reasons.
#[derive(Debug, Clone, Serialize)]
pub struct Rejection {
    pub record: OrderRecord,
    pub failures: Vec<ValidationFailure>,
}

/// Extract a purchase order from one decoded email, stamping the current
/// time as the order date.
#[must_use]
pub fn parse_order(
    registry: &VendorRegistry,
    sender: &str,
    subject: &str,
    body: &str,
) -> ParseOutcome {
    parse_order_at(registry, sender, subject, body, Utc::now())
}

/// Extract a purchase order, stamping `at` as the order date.
///
/// Pure over its inputs: identical arguments yield identical outcomes.
#[must_use]
pub fn parse_order_at(
    registry: &VendorRegistry,
    sender: &str,
    subject: &str,
    body: &str,
    at: DateTime<Utc>,
) -> ParseOutcome {
    let vendor = registry.detect(sender);
    match vendor {
        Some(v) => tracing::debug!(vendor = v.name(), "detected vendor"),
        None => tracing::debug!(sender, "no vendor detected, using generic patterns"),
    }

    let order_number = fields::extract_order_number(subject, body, vendor);
    let total = fields::extract_total(subject, body, vendor);

    let strategy = vendor.map_or(ItemStrategy::LineScan, Vendor::strategy);
    let items = match (vendor, strategy) {
        (Some(v), ItemStrategy::SubjectLine) => {
            items::subject_line_item(subject, total, v).into_iter().collect()
        }
        _ => items::line_scan_items(body, vendor),
    };

    let failures = validate::validate(order_number.as_deref(), total, &items, strategy);

    let record = OrderRecord {
        order_number: order_number.unwrap_or_else(|| UNKNOWN_ORDER_NUMBER.to_string()),
        vendor: vendor.map_or_else(|| UNKNOWN_VENDOR.to_string(), |v| v.name().to_string()),
        total: total.unwrap_or(Decimal::ZERO),
        items,
        order_date: at,
    };

    if failures.is_empty() {
        tracing::debug!(
            order = %record.order_number,
            vendor = %record.vendor,
            items = record.items.len(),
            "extracted order"
        );
        ParseOutcome::Order(record)
    } else {
        tracing::debug!(?failures, vendor = %record.vendor, "extraction rejected");
        ParseOutcome::Rejected(Rejection { record, failures })
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
