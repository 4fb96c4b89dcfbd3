//! Decoded email boundary type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A decoded email handed over by a mail source.
///
/// Transport concerns (MIME multipart, base64, HTML stripping) are the mail
/// source's responsibility: by the time a message reaches the extraction
/// engine, `subject` and `body` are plain text and absent parts are empty
/// strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Source-assigned message id, used for logging and dedup by callers.
    pub id: String,
    /// Raw `From` header value, e.g. `Orders <auto-confirm@amazon.com>`.
    pub from: String,
    pub subject: String,
    pub body: String,
    /// Received timestamp, when the source exposes one.
    pub date: Option<DateTime<Utc>>,
}
