//! Shared domain types and configuration for the ordext workspace.
//!
//! Holds the order/record data model produced by the extraction engine, the
//! decoded email boundary type consumed from mail sources, and the vendor
//! pattern registry configuration (built-in defaults plus optional YAML
//! override).

pub mod app_config;
pub mod config;
pub mod error;
pub mod message;
pub mod order;
pub mod parsed;
pub mod vendors;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use message::EmailMessage;
pub use order::{LineItem, OrderRecord, UNKNOWN_ORDER_NUMBER, UNKNOWN_VENDOR};
pub use parsed::{ConfidenceReport, ExtractedData, ItemCandidate, ParsedEmail};
pub use vendors::{
    builtin_registry, load_registry, parse_registry, Allowlist, ItemStrategy, RegistryFile,
    VendorConfig, VendorPatterns,
};
