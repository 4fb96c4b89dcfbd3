//! Order-store boundary for extracted purchase orders.
//!
//! The engine hands ownership of accepted [`ordext_core::OrderRecord`]s to a
//! store, which persists them idempotently keyed by
//! `(account, order number, vendor)` and accumulates an inventory ledger per
//! normalized item-name key. This crate defines the trait boundary and an
//! in-memory implementation for development, tests and the CLI.

pub mod error;
pub mod memory;
pub mod normalize;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use normalize::inventory_key;
pub use store::{InventoryLevel, OrderStore, UpsertOutcome};
