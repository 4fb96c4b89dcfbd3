//! Completeness-based confidence scoring for the enrichment path.

use ordext_core::{Allowlist, ConfidenceReport, ItemCandidate};

/// Captured ids at least this long get the high-confidence tier.
const STRONG_ID_LEN: usize = 5;

/// Score one extraction's completeness.
///
/// Order number: two-tier by captured length. Vendor: boosted when the
/// detected vendor sits on the explicit allowlist, lower baseline otherwise.
/// Items: fraction of candidates with description, quantity and price all
/// populated. Overall: unweighted mean of the three.
pub(crate) fn score(
    order_number: Option<&str>,
    vendor: Option<&str>,
    items: &[ItemCandidate],
    allowlist: &Allowlist,
) -> ConfidenceReport {
    let order_number_score = match order_number {
        Some(id) if id.len() >= STRONG_ID_LEN => 0.8,
        Some(_) => 0.4,
        None => 0.0,
    };

    let vendor_score = match vendor {
        Some(v) if allowlist.is_allowlisted_sender(v) => 0.9,
        Some(_) => 0.5,
        None => 0.0,
    };

    let items_score = if items.is_empty() {
        0.0
    } else {
        let complete = items.iter().filter(|i| i.is_complete()).count();
        #[allow(clippy::cast_precision_loss)]
        let fraction = complete as f32 / items.len() as f32;
        fraction
    };

    ConfidenceReport {
        order_number: order_number_score,
        vendor: vendor_score,
        items: items_score,
        overall: (order_number_score + vendor_score + items_score) / 3.0,
    }
}
