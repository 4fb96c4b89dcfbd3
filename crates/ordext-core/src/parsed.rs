//! Enrichment records for the richer parsing path.
//!
//! Unlike [`crate::OrderRecord`], these types keep unresolved fields as
//! `None` and carry partial item candidates — they feed triage and
//! confidence reporting, not the order store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-field confidence scores in `[0.0, 1.0]`.
///
/// Advisory metadata for downstream triage (e.g. routing low-confidence
/// extractions to manual review); acceptance is governed solely by
/// validation, never by these scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceReport {
    pub order_number: f32,
    pub vendor: f32,
    pub items: f32,
    /// Unweighted mean of the other three scores.
    pub overall: f32,
}

/// A candidate item line with whatever fields resolved for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemCandidate {
    pub sku: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<Decimal>,
}

impl ItemCandidate {
    /// Whether description, quantity and price all resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.description.as_ref().is_some_and(|d| !d.is_empty())
            && self.quantity.is_some()
            && self.price.is_some()
    }
}

/// Fields extracted from one email, before any sentinel rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    pub order_number: Option<String>,
    pub vendor: Option<String>,
    pub items: Vec<ItemCandidate>,
    pub total: Option<Decimal>,
    pub confidence: ConfidenceReport,
}

/// One parsed email with forwarding context and confidence attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedEmail {
    pub message_id: String,
    pub subject: String,
    pub from: String,
    pub received_date: DateTime<Utc>,
    pub is_forwarded: bool,
    /// For forwarded mail, the sender recovered from the quoted body.
    pub original_sender: Option<String>,
    pub data: ExtractedData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_with_all_fields_is_complete() {
        let candidate = ItemCandidate {
            sku: None,
            description: Some("2 x Widget".to_string()),
            quantity: Some(2),
            price: Some("9.99".parse().unwrap()),
        };
        assert!(candidate.is_complete());
    }

    #[test]
    fn candidate_missing_price_is_incomplete() {
        let candidate = ItemCandidate {
            description: Some("Qty: 2".to_string()),
            quantity: Some(2),
            ..ItemCandidate::default()
        };
        assert!(!candidate.is_complete());
    }

    #[test]
    fn candidate_with_empty_description_is_incomplete() {
        let candidate = ItemCandidate {
            description: Some(String::new()),
            quantity: Some(1),
            price: Some("1.00".parse().unwrap()),
            sku: None,
        };
        assert!(!candidate.is_complete());
    }
}
