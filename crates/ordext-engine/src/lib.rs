//! Rule-based purchase-order extraction engine.
//!
//! Resolves a vendor from the sender address, runs layered pattern matching
//! (vendor-specific patterns before generic fallbacks) over subject and body,
//! assembles line items with the vendor's strategy, and validates the result
//! into either an accepted [`ordext_core::OrderRecord`] or a rejection.
//!
//! The engine is a pure, synchronous function over its string inputs and a
//! compiled [`VendorRegistry`]: no I/O, no shared mutable state, safe to call
//! concurrently.

pub mod enrich;
pub mod extract;
pub mod registry;
pub mod validate;

mod confidence;
mod fields;
mod items;
mod money;
mod patterns;

pub use enrich::parse_email;
pub use extract::{parse_order, parse_order_at, ParseOutcome, Rejection};
pub use registry::{PatternError, Vendor, VendorRegistry};
pub use validate::ValidationFailure;
