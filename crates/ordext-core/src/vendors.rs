//! Vendor pattern registry configuration.
//!
//! The registry is process-wide immutable configuration: built once at
//! startup (from the compiled-in defaults or a YAML file) and shared by
//! reference across extraction calls. Pattern strings here are uncompiled;
//! the engine compiles them once when it builds its runtime registry.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// How items are assembled for a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStrategy {
    /// Scan body lines, accumulating quantity/price until both resolve.
    LineScan,
    /// Infer a single item from the subject line; unit price is derived
    /// from the order total.
    SubjectLine,
}

impl std::fmt::Display for ItemStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStrategy::LineScan => write!(f, "line_scan"),
            ItemStrategy::SubjectLine => write!(f, "subject_line"),
        }
    }
}

/// Ordered, field-specific pattern groups for one vendor.
///
/// Order matters: patterns are tried first to last, and all of them take
/// precedence over the generic fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorPatterns {
    #[serde(default)]
    pub order_number: Vec<String>,
    #[serde(default)]
    pub total: Vec<String>,
    #[serde(default)]
    pub item: Vec<String>,
    #[serde(default)]
    pub quantity: Vec<String>,
    #[serde(default)]
    pub price: Vec<String>,
}

/// One vendor's detection domains and extraction patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorConfig {
    pub name: String,
    /// Sender-address substrings used for detection, checked in order.
    pub domains: Vec<String>,
    pub item_strategy: ItemStrategy,
    pub patterns: VendorPatterns,
}

/// Sender/subject allowlist context for the enrichment parsing path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Allowlist {
    pub subjects: Vec<String>,
    pub senders: Vec<String>,
    pub forwarders: Vec<String>,
    pub keywords: Vec<String>,
}

impl Default for Allowlist {
    fn default() -> Self {
        Self {
            subjects: strings(&["order", "confirmation", "invoice"]),
            senders: vec![],
            forwarders: vec![],
            keywords: strings(&["order", "purchase"]),
        }
    }
}

impl Allowlist {
    /// Exact membership check against the trusted-sender list.
    #[must_use]
    pub fn is_allowlisted_sender(&self, vendor: &str) -> bool {
        self.senders.iter().any(|s| s == vendor)
    }

    /// Whether the `From` address belongs to a known forwarding service.
    #[must_use]
    pub fn is_known_forwarder(&self, from: &str) -> bool {
        let from = from.to_lowercase();
        self.forwarders
            .iter()
            .any(|f| !f.is_empty() && from.contains(&f.to_lowercase()))
    }

    /// Whether the subject mentions any allowlisted subject keyword.
    #[must_use]
    pub fn subject_matches(&self, subject: &str) -> bool {
        let subject = subject.to_lowercase();
        self.subjects
            .iter()
            .any(|s| !s.is_empty() && subject.contains(&s.to_lowercase()))
    }
}

/// Top-level registry file shape (`vendors.yaml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryFile {
    pub vendors: Vec<VendorConfig>,
    #[serde(default)]
    pub allowlist: Allowlist,
}

/// The compiled-in default registry: Amazon (subject-line inference) and
/// Nike (line-scan), with their known confirmation-mail formats.
#[must_use]
pub fn builtin_registry() -> RegistryFile {
    RegistryFile {
        vendors: vec![
            VendorConfig {
                name: "Amazon".to_string(),
                domains: strings(&["amazon.com"]),
                item_strategy: ItemStrategy::SubjectLine,
                patterns: VendorPatterns {
                    order_number: strings(&[r"(?i)Order #\s*(\d{3}-\d{7}-\d{7})"]),
                    total: strings(&[r"(?i)Order Total:\s*\$\s*([\d,]+\.\d{2})"]),
                    item: strings(&[r#"(?i)Your Amazon\.com order of (\d+) x "([^"]+)""#]),
                    quantity: strings(&[r"(?i)Quantity:\s*(\d+)"]),
                    price: strings(&[r"\$\s*([\d,]+\.\d{2})"]),
                },
            },
            VendorConfig {
                name: "Nike".to_string(),
                domains: strings(&["nike.com"]),
                item_strategy: ItemStrategy::LineScan,
                patterns: VendorPatterns {
                    order_number: strings(&[
                        r"(?i)Order Number:?\s*([A-Z0-9-]+)",
                        r"(?i)Confirmation Number:?\s*([A-Z0-9-]+)",
                    ]),
                    total: strings(&[
                        r"(?i)Total:\s*\$\s*([\d,]+\.\d{2})",
                        r"(?i)Amount:\s*\$\s*([\d,]+\.\d{2})",
                    ]),
                    item: strings(&[r"(?s)Style:\s*(.*?)(?:Size:|$)"]),
                    quantity: strings(&[r"(?i)Quantity:\s*(\d+)", r"(?i)QTY:\s*(\d+)"]),
                    price: strings(&[
                        r"(?i)Price:\s*\$\s*([\d,]+\.\d{2})",
                        r"\$\s*([\d,]+\.\d{2})",
                    ]),
                },
            },
        ],
        allowlist: Allowlist::default(),
    }
}

/// Load and validate a vendor registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_registry(path: &Path) -> Result<RegistryFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VendorsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_registry(&content)
}

/// Parse and validate a vendor registry from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text cannot be parsed or fails validation.
pub fn parse_registry(yaml: &str) -> Result<RegistryFile, ConfigError> {
    let registry: RegistryFile = serde_yaml::from_str(yaml).map_err(ConfigError::VendorsFileParse)?;
    validate_registry(&registry)?;
    Ok(registry)
}

fn validate_registry(registry: &RegistryFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for vendor in &registry.vendors {
        if vendor.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "vendor name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(vendor.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate vendor name: '{}'",
                vendor.name
            )));
        }

        if vendor.domains.is_empty() {
            return Err(ConfigError::Validation(format!(
                "vendor '{}' has no detection domains",
                vendor.name
            )));
        }

        if vendor.domains.iter().any(|d| d.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "vendor '{}' has an empty detection domain",
                vendor.name
            )));
        }

        let groups = [
            &vendor.patterns.order_number,
            &vendor.patterns.total,
            &vendor.patterns.item,
            &vendor.patterns.quantity,
            &vendor.patterns.price,
        ];
        if groups.iter().any(|g| g.iter().any(|p| p.trim().is_empty())) {
            return Err(ConfigError::Validation(format!(
                "vendor '{}' has an empty pattern string",
                vendor.name
            )));
        }
    }

    Ok(())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
#[path = "vendors_test.rs"]
mod vendors_test;
