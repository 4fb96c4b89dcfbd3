//! Batch processing: drain a mail source, extract, store.

use ordext_engine::{parse_order, ParseOutcome, VendorRegistry};
use ordext_store::{OrderStore, UpsertOutcome};

use crate::source::MailSource;
use crate::PipelineError;

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub fetched: usize,
    /// Accepted orders newly inserted into the store.
    pub stored: usize,
    /// Accepted orders that replaced an already-stored record.
    pub updated: usize,
    /// Messages the engine rejected as not containing a usable order.
    pub rejected: usize,
    /// Accepted orders the store refused.
    pub failed: usize,
}

/// Fetch up to `max` messages and run each through extraction and storage.
///
/// Messages are processed independently: a rejection or store failure is
/// logged and counted, and the batch continues.
///
/// # Errors
///
/// Returns [`PipelineError`] only when the source itself fails; per-message
/// outcomes never error.
pub async fn process_mailbox<S, O>(
    source: &S,
    registry: &VendorRegistry,
    store: &O,
    account: &str,
    max: usize,
) -> Result<ProcessSummary, PipelineError>
where
    S: MailSource + ?Sized,
    O: OrderStore + ?Sized,
{
    let messages = source.fetch(max).await?;
    tracing::info!(count = messages.len(), account, "processing messages");

    let mut summary = ProcessSummary {
        fetched: messages.len(),
        ..ProcessSummary::default()
    };

    for message in &messages {
        if !registry.allowlist().subject_matches(&message.subject) {
            tracing::debug!(
                message = %message.id,
                subject = %message.subject,
                "subject matches no allowlisted keyword"
            );
        }

        match parse_order(registry, &message.from, &message.subject, &message.body) {
            ParseOutcome::Order(record) => {
                match store.upsert_order(account, &record).await {
                    Ok(UpsertOutcome::Inserted) => {
                        summary.stored += 1;
                        tracing::info!(
                            message = %message.id,
                            order = %record.order_number,
                            vendor = %record.vendor,
                            "stored order"
                        );
                    }
                    Ok(UpsertOutcome::Updated) => {
                        summary.updated += 1;
                        tracing::info!(
                            message = %message.id,
                            order = %record.order_number,
                            "order already known, record refreshed"
                        );
                    }
                    Err(e) => {
                        summary.failed += 1;
                        tracing::error!(message = %message.id, error = %e, "failed to store order");
                    }
                }
            }
            ParseOutcome::Rejected(rejection) => {
                summary.rejected += 1;
                tracing::warn!(
                    message = %message.id,
                    failures = ?rejection.failures,
                    "failed to parse order details"
                );
            }
        }
    }

    tracing::info!(
        fetched = summary.fetched,
        stored = summary.stored,
        updated = summary.updated,
        rejected = summary.rejected,
        failed = summary.failed,
        "processing summary"
    );

    Ok(summary)
}
