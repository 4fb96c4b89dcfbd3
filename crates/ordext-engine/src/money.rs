//! Low-level parsing of captured amounts and counts.

use rust_decimal::Decimal;

/// Parse a captured money amount into a `Decimal`.
///
/// Locale-invariant: `,` is a group separator (stripped), `.` is the
/// decimal point.
pub(crate) fn parse_money(raw: &str) -> Option<Decimal> {
    raw.replace(',', "").trim().parse::<Decimal>().ok()
}

pub(crate) fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}
