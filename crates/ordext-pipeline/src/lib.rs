//! Mail-source boundary and batch processing.
//!
//! Supplies decoded messages to the extraction engine and routes accepted
//! orders into an order store, isolating each message: a rejection or store
//! failure is logged and counted, never fatal to the batch.

pub mod error;
pub mod file;
pub mod html;
pub mod processor;
pub mod source;

pub use error::PipelineError;
pub use file::{read_message, FileSource};
pub use html::html_to_text;
pub use processor::{process_mailbox, ProcessSummary};
pub use source::{MailSource, StaticSource};
