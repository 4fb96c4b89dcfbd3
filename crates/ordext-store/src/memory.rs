//! In-memory order store for development, tests and the CLI.

use std::collections::HashMap;

use async_trait::async_trait;
use ordext_core::OrderRecord;
use tokio::sync::RwLock;

use crate::normalize::inventory_key;
use crate::store::{InventoryLevel, OrderStore, UpsertOutcome};
use crate::StoreError;

#[derive(Debug, Default)]
struct AccountState {
    /// Stored orders keyed by `(order number, vendor)`.
    orders: HashMap<(String, String), OrderRecord>,
    /// Inventory ledger keyed by normalized item name.
    inventory: HashMap<String, InventoryLevel>,
}

/// Order store backed by process memory; data is lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RwLock<HashMap<String, AccountState>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders for one account.
    pub async fn order_count(&self, account: &str) -> usize {
        self.accounts
            .read()
            .await
            .get(account)
            .map_or(0, |state| state.orders.len())
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn upsert_order(
        &self,
        account: &str,
        order: &OrderRecord,
    ) -> Result<UpsertOutcome, StoreError> {
        if !order.has_order_number() {
            return Err(StoreError::InvalidRecord(
                "order number is the UNKNOWN sentinel".to_string(),
            ));
        }

        let mut accounts = self.accounts.write().await;
        let state = accounts.entry(account.to_string()).or_default();
        let key = (order.order_number.clone(), order.vendor.clone());

        if state.orders.insert(key, order.clone()).is_some() {
            tracing::debug!(
                account,
                order = %order.order_number,
                vendor = %order.vendor,
                "order already stored, replaced without ledger change"
            );
            return Ok(UpsertOutcome::Updated);
        }

        for item in &order.items {
            let level = state
                .inventory
                .entry(inventory_key(&item.name))
                .or_insert_with(|| InventoryLevel {
                    name: item.name.clone(),
                    quantity: 0,
                    last_order_price: item.unit_price,
                    order_references: vec![],
                });
            level.quantity += u64::from(item.quantity);
            level.name = item.name.clone();
            level.last_order_price = item.unit_price;
            if !level.order_references.contains(&order.order_number) {
                level.order_references.push(order.order_number.clone());
            }
        }

        tracing::debug!(
            account,
            order = %order.order_number,
            vendor = %order.vendor,
            items = order.items.len(),
            "order stored"
        );
        Ok(UpsertOutcome::Inserted)
    }

    async fn get_order(
        &self,
        account: &str,
        order_number: &str,
        vendor: &str,
    ) -> Result<Option<OrderRecord>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(account).and_then(|state| {
            state
                .orders
                .get(&(order_number.to_string(), vendor.to_string()))
                .cloned()
        }))
    }

    async fn inventory(&self, account: &str) -> Result<Vec<(String, InventoryLevel)>, StoreError> {
        let accounts = self.accounts.read().await;
        let mut levels: Vec<(String, InventoryLevel)> = accounts
            .get(account)
            .map(|state| {
                state
                    .inventory
                    .iter()
                    .map(|(key, level)| (key.clone(), level.clone()))
                    .collect()
            })
            .unwrap_or_default();
        levels.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(levels)
    }
}
