//! Enrichment parsing path.
//!
//! Produces a [`ParsedEmail`] with forwarding context, partial item
//! candidates and a confidence report instead of the strict
//! accepted-or-rejected order outcome. Used for triage surfaces; nothing
//! here gates acceptance.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use ordext_core::{EmailMessage, ExtractedData, ItemCandidate, ParsedEmail};
use regex::Regex;

use crate::patterns::{first_capture, GENERIC_PRICE, GENERIC_QUANTITY};
use crate::registry::{Vendor, VendorRegistry};
use crate::{confidence, fields, money};

static ANGLE_ADDR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(.+?)>").expect("valid address pattern"));

/// Quoted-header patterns for recovering the sender a forward hides; the
/// bracketed-address form is preferred over the bare display name.
static ORIGINAL_SENDER: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:From|Sender):\s*[^\r\n<]*<([^>\r\n]+)>",
        r"(?i)(?:From|Sender):\s*([^\r\n<]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid sender pattern"))
    .collect()
});

const ITEM_SECTION_MARKERS: [&str; 3] = ["items:", "products:", "order details:"];

/// Parse one decoded email into an enrichment record.
///
/// Never fails: degenerate input yields emptier output with lower
/// confidence. `received_date` falls back to `at` when the source exposed
/// no date.
#[must_use]
pub fn parse_email(
    registry: &VendorRegistry,
    message: &EmailMessage,
    at: DateTime<Utc>,
) -> ParsedEmail {
    let allowlist = registry.allowlist();

    let is_forwarded = message.subject.to_lowercase().contains("fwd:")
        || allowlist.is_known_forwarder(&message.from);
    let original_sender = if is_forwarded {
        extract_original_sender(&message.body)
    } else {
        None
    };

    let profile = registry.detect(&message.from);
    let vendor = if is_forwarded {
        original_sender.clone()
    } else {
        profile
            .map(|v| v.name().to_string())
            .or_else(|| sender_address(&message.from))
    };

    let order_number = fields::extract_order_number(&message.subject, &message.body, profile);
    let total = fields::extract_total(&message.subject, &message.body, profile);
    let items = candidate_items(&message.body, profile);
    let confidence = confidence::score(
        order_number.as_deref(),
        vendor.as_deref(),
        &items,
        allowlist,
    );

    tracing::debug!(
        message = %message.id,
        forwarded = is_forwarded,
        candidates = items.len(),
        overall = confidence.overall,
        "parsed email"
    );

    ParsedEmail {
        message_id: message.id.clone(),
        subject: message.subject.clone(),
        from: message.from.clone(),
        received_date: message.date.unwrap_or(at),
        is_forwarded,
        original_sender,
        data: ExtractedData {
            order_number,
            vendor,
            items,
            total,
            confidence,
        },
    }
}

/// The address inside angle brackets, or the whole header when there are
/// none.
fn sender_address(from: &str) -> Option<String> {
    let addr = ANGLE_ADDR
        .captures(from)
        .and_then(|cap| cap.get(1))
        .map_or(from, |m| m.as_str());
    let addr = addr.trim();
    (!addr.is_empty()).then(|| addr.to_string())
}

fn extract_original_sender(body: &str) -> Option<String> {
    for re in ORIGINAL_SENDER.iter() {
        if let Some(candidate) = re
            .captures(body)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim())
        {
            if !candidate.is_empty() {
                return Some(candidate.to_string());
            }
        }
    }
    None
}

/// Collect partial item candidates from the itemized section of the body.
///
/// Unlike the strict accumulator, a line with either field becomes a
/// candidate on its own; completeness feeds the confidence score rather
/// than gating emission.
fn candidate_items(body: &str, vendor: Option<&Vendor>) -> Vec<ItemCandidate> {
    let quantity_patterns: Vec<&Regex> = vendor
        .map_or(&[][..], |v| v.quantity.as_slice())
        .iter()
        .chain(GENERIC_QUANTITY.iter())
        .collect();
    let price_patterns: Vec<&Regex> = vendor
        .map_or(&[][..], |v| v.price.as_slice())
        .iter()
        .chain(GENERIC_PRICE.iter())
        .collect();

    let mut in_items_section = false;
    let mut items = Vec::new();

    for line in body.lines() {
        let lower = line.to_lowercase();
        if ITEM_SECTION_MARKERS.iter().any(|m| lower.contains(m)) {
            in_items_section = true;
            continue;
        }
        if !in_items_section || line.trim().is_empty() {
            continue;
        }

        let quantity = first_capture(quantity_patterns.iter().copied(), line)
            .and_then(|raw| money::parse_quantity(&raw));
        let price = first_capture(price_patterns.iter().copied(), line)
            .and_then(|raw| money::parse_money(&raw));

        if quantity.is_some() || price.is_some() {
            items.push(ItemCandidate {
                sku: None,
                description: Some(line.trim().to_string()),
                quantity,
                price,
            });
        }
    }

    items
}
