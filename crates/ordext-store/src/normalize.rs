//! Inventory key normalization.

/// Normalize an item name into a ledger key: case-folded, with runs of
/// non-alphanumeric characters collapsed to single hyphens and no leading
/// or trailing hyphen.
#[must_use]
pub fn inventory_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::inventory_key;

    #[test]
    fn folds_case_and_spaces() {
        assert_eq!(inventory_key("Wireless Mouse"), "wireless-mouse");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(inventory_key("USB-C  (3 ft.) cable!"), "usb-c-3-ft-cable");
    }

    #[test]
    fn trims_edge_hyphens() {
        assert_eq!(inventory_key("  *Widget*  "), "widget");
    }

    #[test]
    fn non_ascii_is_treated_as_separator() {
        assert_eq!(inventory_key("café crème"), "caf-cr-me");
    }

    #[test]
    fn same_key_for_name_variants() {
        assert_eq!(
            inventory_key("Wireless Mouse"),
            inventory_key("wireless   mouse")
        );
    }
}
