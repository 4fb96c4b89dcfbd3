//! Mail-source trait boundary.

use async_trait::async_trait;
use ordext_core::EmailMessage;

use crate::PipelineError;

/// Supplier of decoded messages.
///
/// Implementations own all transport concerns (retrieval, MIME decoding,
/// HTML normalization); consumers receive plain-text messages with absent
/// parts already collapsed to empty strings.
#[async_trait]
pub trait MailSource: Send + Sync {
    /// Fetch up to `max` messages, oldest-first in source order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] when the source itself is unreachable;
    /// individual bad messages should be skipped, not fatal.
    async fn fetch(&self, max: usize) -> Result<Vec<EmailMessage>, PipelineError>;
}

/// Fixed in-memory source, for tests and wiring examples.
#[derive(Debug, Default)]
pub struct StaticSource {
    messages: Vec<EmailMessage>,
}

impl StaticSource {
    #[must_use]
    pub fn new(messages: Vec<EmailMessage>) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl MailSource for StaticSource {
    async fn fetch(&self, max: usize) -> Result<Vec<EmailMessage>, PipelineError> {
        Ok(self.messages.iter().take(max).cloned().collect())
    }
}
