//! Order-number and total extraction.
//!
//! Both extractors share the same layering: vendor-specific patterns (when a
//! vendor was detected) run before the generic fallbacks, and each pattern is
//! tried against the subject before the body. The first capture wins.

use regex::Regex;
use rust_decimal::Decimal;

use crate::money::parse_money;
use crate::patterns::{GENERIC_ORDER_NUMBER, GENERIC_TOTAL};
use crate::registry::Vendor;

/// Extract an order identifier, or `None` when nothing plausible matched.
///
/// "Not found" is expected input, not a fault; callers render the `UNKNOWN`
/// sentinel at the output boundary.
pub(crate) fn extract_order_number(
    subject: &str,
    body: &str,
    vendor: Option<&Vendor>,
) -> Option<String> {
    let vendor_patterns = vendor.map_or(&[][..], |v| v.order_number.as_slice());
    for re in vendor_patterns.iter().chain(GENERIC_ORDER_NUMBER.iter()) {
        for text in [subject, body] {
            if let Some(id) = first_plausible_id(re, text) {
                return Some(id);
            }
        }
    }
    None
}

/// An id candidate must carry at least one digit; letter-only captures are
/// prose ("Order Confirmation"), not identifiers.
fn first_plausible_id(re: &Regex, text: &str) -> Option<String> {
    re.captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .find(|id| id.bytes().any(|b| b.is_ascii_digit()))
        .map(str::to_string)
}

/// Extract the order total, or `None` when no total pattern matched.
///
/// `None` is rendered as zero at the output boundary; validators distinguish
/// "unresolved" from "zero-cost" by vendor class.
pub(crate) fn extract_total(subject: &str, body: &str, vendor: Option<&Vendor>) -> Option<Decimal> {
    let vendor_patterns = vendor.map_or(&[][..], |v| v.total.as_slice());
    for re in vendor_patterns.iter().chain(GENERIC_TOTAL.iter()) {
        for text in [subject, body] {
            if let Some(value) = re
                .captures(text)
                .and_then(|cap| cap.get(1))
                .and_then(|m| parse_money(m.as_str()))
            {
                return Some(value);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::VendorRegistry;

    fn registry() -> VendorRegistry {
        VendorRegistry::builtin()
    }

    #[test]
    fn amazon_order_number_from_body() {
        let registry = registry();
        let vendor = registry.detect("auto-confirm@amazon.com");
        let got = extract_order_number(
            "Your Amazon.com order has shipped",
            "Order #123-4567890-1234567\nOrder Total: $45.00",
            vendor,
        );
        assert_eq!(got.as_deref(), Some("123-4567890-1234567"));
    }

    #[test]
    fn vendor_pattern_beats_generic() {
        let registry = registry();
        let vendor = registry.detect("auto-confirm@amazon.com");
        // The generic `#` fallback would capture `999-99` from the body's
        // first hash; the Amazon pattern requires the full 3-7-7 shape.
        let got = extract_order_number(
            "",
            "ref # 999-99\nOrder #123-4567890-1234567",
            vendor,
        );
        assert_eq!(got.as_deref(), Some("123-4567890-1234567"));
    }

    #[test]
    fn subject_is_probed_before_body() {
        let got = extract_order_number("Order #ABC-11111", "Order #ZZZ-99999", None);
        assert_eq!(got.as_deref(), Some("ABC-11111"));
    }

    #[test]
    fn letter_only_candidates_are_skipped() {
        let got = extract_order_number("Order Confirmation", "Thanks for your order", None);
        assert_eq!(got, None);
    }

    #[test]
    fn generic_confirmation_pattern_matches() {
        let got = extract_order_number("", "Confirmation: NK-20431-77", None);
        assert_eq!(got.as_deref(), Some("NK-20431-77"));
    }

    #[test]
    fn total_with_thousands_separator() {
        let got = extract_total("", "Order Total: $1,234.56", None);
        assert_eq!(got, Some("1234.56".parse().unwrap()));
    }

    #[test]
    fn total_falls_back_to_loose_total_pattern() {
        let got = extract_total("", "your total today was $12.34, thanks!", None);
        assert_eq!(got, Some("12.34".parse().unwrap()));
    }

    #[test]
    fn total_absent_yields_none() {
        assert_eq!(extract_total("Order Confirmation", "no amounts here", None), None);
    }

    #[test]
    fn bare_dollar_amount_is_the_last_resort() {
        let got = extract_total("", "items came to $19.99 with free shipping", None);
        assert_eq!(got, Some("19.99".parse().unwrap()));
    }

    #[test]
    fn nike_total_pattern_applies() {
        let registry = registry();
        let vendor = registry.detect("noreply@nike.com");
        let got = extract_total("", "Amount: $89.99", vendor);
        assert_eq!(got, Some("89.99".parse().unwrap()));
    }
}
