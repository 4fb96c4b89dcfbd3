//! Generic fallback patterns shared across vendors.
//!
//! These run after a detected vendor's own patterns, and are the only
//! patterns applied when no vendor matched the sender. Order within each
//! group is precedence order.

use std::sync::LazyLock;

use regex::Regex;

pub(crate) static GENERIC_ORDER_NUMBER: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)#\s*([A-Z0-9-]{5,})",
        r"(?i)order[:\s#]+([A-Z0-9-]{5,})",
        r"(?i)confirmation[:\s#]+([A-Z0-9-]{5,})",
    ])
});

pub(crate) static GENERIC_TOTAL: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)total:?\s*\$\s*([\d,]+\.\d{2})",
        r"(?i)amount:?\s*\$\s*([\d,]+\.\d{2})",
        r"(?i)\btotal\b.*?\$\s*([\d,]+\.\d{2})",
        // Last resort: any bare dollar amount.
        r"\$\s*([\d,]+\.\d{2})",
    ])
});

pub(crate) static GENERIC_PRICE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\$\s*([\d,]+\.\d{2})",
        r"(?i)price:?\s*\$\s*([\d,]+\.\d{2})",
    ])
});

pub(crate) static GENERIC_QUANTITY: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)qty:?\s*(\d+)",
        r"(?i)quantity:?\s*(\d+)",
        r"(?i)\b(\d+)\s*x\b",
        r"×\s*(\d+)",
    ])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid generic pattern"))
        .collect()
}

/// Return the first pattern's first capture group match against `text`.
pub(crate) fn first_capture<'r, I>(patterns: I, text: &str) -> Option<String>
where
    I: IntoIterator<Item = &'r Regex>,
{
    for re in patterns {
        if let Some(cap) = re.captures(text) {
            if let Some(m) = cap.get(1) {
                return Some(m.as_str().to_string());
            }
        }
    }
    None
}
