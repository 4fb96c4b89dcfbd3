use std::path::PathBuf;

use ordext_core::AppConfig;
use ordext_engine::VendorRegistry;
use ordext_pipeline::{process_mailbox, FileSource};
use ordext_store::{MemoryStore, OrderStore};

pub(crate) async fn run(
    registry: &VendorRegistry,
    config: &AppConfig,
    mailbox: Option<PathBuf>,
    max: Option<usize>,
) -> anyhow::Result<()> {
    let dir = mailbox.unwrap_or_else(|| config.mailbox_dir.clone());
    let max = max.unwrap_or(config.max_messages_per_run);

    let source = FileSource::new(dir);
    let store = MemoryStore::new();
    let summary = process_mailbox(&source, registry, &store, &config.account_id, max).await?;

    println!(
        "fetched {}, stored {}, updated {}, rejected {}, failed {}",
        summary.fetched, summary.stored, summary.updated, summary.rejected, summary.failed
    );

    let inventory = store.inventory(&config.account_id).await?;
    if inventory.is_empty() {
        println!("inventory: empty");
        return Ok(());
    }
    println!("inventory:");
    for (key, level) in inventory {
        println!(
            "  {key}: {} on hand, last price ${}, orders {}",
            level.quantity,
            level.last_order_price,
            level.order_references.join(", ")
        );
    }
    Ok(())
}
