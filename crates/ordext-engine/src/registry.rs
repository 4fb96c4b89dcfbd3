//! Compiled vendor registry and vendor detection.

use ordext_core::{builtin_registry, Allowlist, ItemStrategy, RegistryFile, VendorConfig};
use regex::Regex;
use thiserror::Error;

/// A vendor pattern failed to compile, with enough context to fix the
/// registry file.
#[derive(Debug, Error)]
#[error("vendor '{vendor}' has an invalid {field} pattern `{pattern}`: {source}")]
pub struct PatternError {
    pub vendor: String,
    pub field: &'static str,
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// One vendor's compiled pattern groups.
#[derive(Debug)]
pub struct Vendor {
    name: String,
    /// Detection substrings, pre-lowercased.
    domains: Vec<String>,
    strategy: ItemStrategy,
    pub(crate) order_number: Vec<Regex>,
    pub(crate) total: Vec<Regex>,
    pub(crate) item: Vec<Regex>,
    pub(crate) quantity: Vec<Regex>,
    pub(crate) price: Vec<Regex>,
}

impl Vendor {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn strategy(&self) -> ItemStrategy {
        self.strategy
    }

    #[must_use]
    pub fn domains(&self) -> &[String] {
        &self.domains
    }
}

/// Immutable, compiled vendor table shared across extraction calls.
#[derive(Debug)]
pub struct VendorRegistry {
    vendors: Vec<Vendor>,
    allowlist: Allowlist,
}

impl VendorRegistry {
    /// Compile every vendor's pattern groups.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for the first pattern that fails to compile,
    /// naming the vendor and field it belongs to.
    pub fn compile(file: &RegistryFile) -> Result<Self, PatternError> {
        let vendors = file
            .vendors
            .iter()
            .map(compile_vendor)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            vendors,
            allowlist: file.allowlist.clone(),
        })
    }

    /// Compile the built-in default registry.
    ///
    /// # Panics
    ///
    /// Does not panic in practice: the built-in patterns are fixed and
    /// covered by tests.
    #[must_use]
    pub fn builtin() -> Self {
        Self::compile(&builtin_registry()).expect("built-in vendor patterns compile")
    }

    /// Resolve the sender address to a vendor by case-insensitive domain
    /// containment, in registry order; first match wins.
    #[must_use]
    pub fn detect(&self, sender: &str) -> Option<&Vendor> {
        let sender = sender.to_lowercase();
        self.vendors
            .iter()
            .find(|vendor| vendor.domains.iter().any(|domain| sender.contains(domain)))
    }

    #[must_use]
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    #[must_use]
    pub fn allowlist(&self) -> &Allowlist {
        &self.allowlist
    }
}

fn compile_vendor(config: &VendorConfig) -> Result<Vendor, PatternError> {
    Ok(Vendor {
        name: config.name.clone(),
        domains: config
            .domains
            .iter()
            .map(|d| d.to_lowercase())
            .collect(),
        strategy: config.item_strategy,
        order_number: compile_group(&config.name, "order_number", &config.patterns.order_number)?,
        total: compile_group(&config.name, "total", &config.patterns.total)?,
        item: compile_group(&config.name, "item", &config.patterns.item)?,
        quantity: compile_group(&config.name, "quantity", &config.patterns.quantity)?,
        price: compile_group(&config.name, "price", &config.patterns.price)?,
    })
}

fn compile_group(
    vendor: &str,
    field: &'static str,
    patterns: &[String],
) -> Result<Vec<Regex>, PatternError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| PatternError {
                vendor: vendor.to_string(),
                field,
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordext_core::VendorPatterns;

    #[test]
    fn builtin_registry_compiles() {
        let registry = VendorRegistry::builtin();
        assert_eq!(registry.vendors().len(), 2);
    }

    #[test]
    fn detect_matches_domain_containment() {
        let registry = VendorRegistry::builtin();
        let vendor = registry.detect("auto-confirm@amazon.com").unwrap();
        assert_eq!(vendor.name(), "Amazon");
    }

    #[test]
    fn detect_is_case_insensitive() {
        let registry = VendorRegistry::builtin();
        let vendor = registry.detect("ORDERS@MAIL.AMAZON.COM").unwrap();
        assert_eq!(vendor.name(), "Amazon");
    }

    #[test]
    fn detect_unknown_sender_returns_none() {
        let registry = VendorRegistry::builtin();
        assert!(registry.detect("newsletter@example.org").is_none());
    }

    #[test]
    fn detect_first_registered_vendor_wins() {
        let mut file = builtin_registry();
        // Second profile claiming the same domain never matches.
        file.vendors.push(VendorConfig {
            name: "Amazon Marketplace".to_string(),
            domains: vec!["amazon.com".to_string()],
            item_strategy: ItemStrategy::LineScan,
            patterns: VendorPatterns::default(),
        });
        let registry = VendorRegistry::compile(&file).unwrap();
        assert_eq!(
            registry.detect("auto-confirm@amazon.com").unwrap().name(),
            "Amazon"
        );
    }

    #[test]
    fn compile_reports_bad_pattern_with_context() {
        let mut file = builtin_registry();
        file.vendors[1].patterns.total.push("(?i)Total: (".to_string());
        let err = VendorRegistry::compile(&file).unwrap_err();
        assert_eq!(err.vendor, "Nike");
        assert_eq!(err.field, "total");
        assert_eq!(err.pattern, "(?i)Total: (");
    }
}
