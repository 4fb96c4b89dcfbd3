//! Item assembly strategies.
//!
//! Which strategy runs is keyed statically off the vendor profile, never
//! inferred from content shape at runtime.

use std::sync::LazyLock;

use ordext_core::LineItem;
use regex::Regex;
use rust_decimal::Decimal;

use crate::money::{parse_money, parse_quantity};
use crate::patterns::{first_capture, GENERIC_PRICE, GENERIC_QUANTITY};
use crate::registry::Vendor;

/// An item name of the form `2 x "Widget"` carries its own quantity split.
static QTY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)^(\d+)\s*x\s*"?(.+?)"?$"#).expect("valid prefix pattern"));

/// Scan body lines, accumulating quantity and price independently until
/// both are known, then flush one item named after the flushing line.
///
/// Quantity and price may arrive on different lines of one logical block;
/// the accumulator carries the partial state forward and resets after each
/// emitted item. A line contributing neither field is ignored.
pub(crate) fn line_scan_items(body: &str, vendor: Option<&Vendor>) -> Vec<LineItem> {
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

    let mut quantity: Option<u32> = None;
    let mut price: Option<Decimal> = None;
    let mut items = Vec::new();

    for line in body.lines() {
        let line_quantity = first_capture(quantity_patterns.iter().copied(), line)
            .and_then(|raw| parse_quantity(&raw));
        let line_price =
            first_capture(price_patterns.iter().copied(), line).and_then(|raw| parse_money(&raw));

        if line_quantity.is_none() && line_price.is_none() {
            continue;
        }

        if line_quantity.is_some() {
            quantity = line_quantity;
        }
        if line_price.is_some() {
            price = line_price;
        }

        if let (Some(q), Some(p)) = (quantity, price) {
            items.push(LineItem {
                name: line.trim().to_string(),
                quantity: q,
                unit_price: p,
            });
            quantity = None;
            price = None;
        }
    }

    items
}

/// Infer a single item from the subject line for vendors that never
/// enumerate items in the body.
///
/// The order total is the only per-purchase money signal such vendors
/// expose, so the unit price is derived: `total / quantity`, rounded to two
/// digits, or zero when no total resolved.
pub(crate) fn subject_line_item(
    subject: &str,
    total: Option<Decimal>,
    vendor: &Vendor,
) -> Option<LineItem> {
    for re in &vendor.item {
        let Some(cap) = re.captures(subject) else {
            continue;
        };

        let (raw_quantity, mut name) = match (cap.get(1), cap.get(2)) {
            (Some(q), Some(n)) => (parse_quantity(q.as_str()), n.as_str().to_string()),
            (Some(n), None) => (None, n.as_str().to_string()),
            _ => continue,
        };
        let mut quantity = raw_quantity.unwrap_or(1);

        if let Some((q, n)) = split_quantity_prefix(&name) {
            quantity = q;
            name = n;
        }

        let quantity = quantity.max(1);
        let unit_price = match total {
            Some(t) if t > Decimal::ZERO => (t / Decimal::from(quantity)).round_dp(2),
            _ => Decimal::ZERO,
        };

        return Some(LineItem {
            name: name.trim().to_string(),
            quantity,
            unit_price,
        });
    }

    None
}

fn split_quantity_prefix(name: &str) -> Option<(u32, String)> {
    let cap = QTY_PREFIX.captures(name.trim())?;
    let quantity = parse_quantity(cap.get(1)?.as_str())?;
    Some((quantity, cap[2].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::VendorRegistry;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn line_scan_emits_when_both_fields_on_one_line() {
        let items = line_scan_items("2 x Widget $9.99", None);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].unit_price, dec("9.99"));
        assert_eq!(items[0].name, "2 x Widget $9.99");
    }

    #[test]
    fn line_scan_joins_split_quantity_and_price_lines() {
        let body = "Items:\nQty: 3\nsome unrelated text\nPrice: $9.99\n";
        let items = line_scan_items(body, None);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
        assert_eq!(items[0].unit_price, dec("9.99"));
        // The flushing line's own text becomes the description.
        assert_eq!(items[0].name, "Price: $9.99");
    }

    #[test]
    fn line_scan_quantity_alone_emits_nothing() {
        let items = line_scan_items("Qty: 4\nQuantity: 2\n", None);
        assert!(items.is_empty());
    }

    #[test]
    fn line_scan_resets_between_items() {
        let body = "Qty: 1\n$5.00\nQty: 2\n$8.00\n";
        let items = line_scan_items(body, None);
        assert_eq!(items.len(), 2);
        assert_eq!((items[0].quantity, items[0].unit_price), (1, dec("5.00")));
        assert_eq!((items[1].quantity, items[1].unit_price), (2, dec("8.00")));
    }

    #[test]
    fn line_scan_uses_vendor_price_pattern_first() {
        let registry = VendorRegistry::builtin();
        let vendor = registry.detect("noreply@nike.com");
        // The generic `$` fallback would grab the struck-through price
        // first; Nike's labelled pattern takes precedence.
        let body = "QTY: 2\nwas $150.00, Price: $120.00\n";
        let items = line_scan_items(body, vendor);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].unit_price, dec("120.00"));
    }

    #[test]
    fn subject_item_with_quantity_and_name_groups() {
        let registry = VendorRegistry::builtin();
        let vendor = registry.detect("auto-confirm@amazon.com").unwrap();
        let item = subject_line_item(
            r#"Your Amazon.com order of 2 x "Wireless Mouse" has shipped"#,
            Some(dec("45.00")),
            vendor,
        )
        .unwrap();
        assert_eq!(item.name, "Wireless Mouse");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, dec("22.50"));
    }

    #[test]
    fn subject_item_unit_price_rounds_to_two_digits() {
        let registry = VendorRegistry::builtin();
        let vendor = registry.detect("auto-confirm@amazon.com").unwrap();
        let item = subject_line_item(
            r#"Your Amazon.com order of 3 x "USB Cable" has shipped"#,
            Some(dec("10.00")),
            vendor,
        )
        .unwrap();
        assert_eq!(item.unit_price, dec("3.33"));
    }

    #[test]
    fn subject_item_without_total_gets_zero_price() {
        let registry = VendorRegistry::builtin();
        let vendor = registry.detect("auto-confirm@amazon.com").unwrap();
        let item = subject_line_item(
            r#"Your Amazon.com order of 2 x "Wireless Mouse" has shipped"#,
            None,
            vendor,
        )
        .unwrap();
        assert_eq!(item.unit_price, Decimal::ZERO);
    }

    #[test]
    fn subject_item_no_pattern_match_yields_none() {
        let registry = VendorRegistry::builtin();
        let vendor = registry.detect("auto-confirm@amazon.com").unwrap();
        assert!(subject_line_item("Your package has shipped", Some(dec("45.00")), vendor).is_none());
    }

    #[test]
    fn subject_item_prefers_embedded_quantity_prefix() {
        let registry = VendorRegistry::builtin();
        let vendor = registry.detect("auto-confirm@amazon.com").unwrap();
        // The captured name itself starts with a quantity multiplier; the
        // more specific split wins over the outer capture.
        let item = subject_line_item(
            r#"Your Amazon.com order of 1 x "4 x AA Battery Pack" has shipped"#,
            Some(dec("20.00")),
            vendor,
        )
        .unwrap();
        assert_eq!(item.quantity, 4);
        assert_eq!(item.name, "AA Battery Pack");
        assert_eq!(item.unit_price, dec("5.00"));
    }
}
