//! Vendor-sensitive acceptance rules.

use ordext_core::{ItemStrategy, LineItem};
use rust_decimal::Decimal;
use serde::Serialize;

/// Why an extracted record was not accepted.
///
/// Rejection is a normal outcome, surfaced as data rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationFailure {
    #[error("no order number was extracted")]
    MissingOrderNumber,
    #[error("order total was missing or zero")]
    MissingTotal,
    #[error("no line items were extracted")]
    NoItems,
}

/// Check an extraction against its vendor class; an empty vector means the
/// record is accepted.
///
/// Subject-line vendors state the purchase only in the subject and may not
/// expose a parseable total at all, so the total requirement is waived for
/// that class — rejecting an otherwise well-formed order over it would drop
/// every order from such vendors.
pub(crate) fn validate(
    order_number: Option<&str>,
    total: Option<Decimal>,
    items: &[LineItem],
    strategy: ItemStrategy,
) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    if order_number.is_none() {
        failures.push(ValidationFailure::MissingOrderNumber);
    }

    if strategy == ItemStrategy::LineScan && total.unwrap_or(Decimal::ZERO) <= Decimal::ZERO {
        failures.push(ValidationFailure::MissingTotal);
    }

    if items.is_empty() {
        failures.push(ValidationFailure::NoItems);
    }

    failures
}
