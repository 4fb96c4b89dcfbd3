//! Storage trait for validated orders and the inventory ledger.

use async_trait::async_trait;
use ordext_core::OrderRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::StoreError;

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// First sighting of this `(account, order number, vendor)` key; the
    /// inventory ledger was accumulated.
    Inserted,
    /// The key already existed; the stored record was replaced and the
    /// ledger left untouched.
    Updated,
}

/// Accumulated inventory for one normalized item key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLevel {
    /// Display name from the most recent contributing item.
    pub name: String,
    pub quantity: u64,
    pub last_order_price: Decimal,
    /// Order numbers that contributed to this level, in arrival order.
    pub order_references: Vec<String>,
}

/// Persistence boundary for accepted orders, scoped per account.
///
/// Upserts must be idempotent on `(account, order number, vendor)`:
/// re-storing the same order replaces the record without double-counting
/// inventory.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Store or replace one validated order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidRecord`] for records carrying the
    /// `UNKNOWN` order-number sentinel, or a backend error from the
    /// implementation.
    async fn upsert_order(
        &self,
        account: &str,
        order: &OrderRecord,
    ) -> Result<UpsertOutcome, StoreError>;

    /// Fetch one stored order by its natural key.
    ///
    /// # Errors
    ///
    /// Returns a backend error from the implementation.
    async fn get_order(
        &self,
        account: &str,
        order_number: &str,
        vendor: &str,
    ) -> Result<Option<OrderRecord>, StoreError>;

    /// The account's inventory ledger, sorted by normalized item key.
    ///
    /// # Errors
    ///
    /// Returns a backend error from the implementation.
    async fn inventory(&self, account: &str) -> Result<Vec<(String, InventoryLevel)>, StoreError>;
}
