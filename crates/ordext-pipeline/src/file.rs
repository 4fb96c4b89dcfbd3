//! Filesystem-backed mail source.
//!
//! Reads `.eml`-style fixtures: a small header block (`From:`, `Subject:`,
//! optional `Date:` and `Content-Type:`), a blank line, then the body. HTML
//! bodies are normalized to plain text before crossing the boundary.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ordext_core::EmailMessage;

use crate::html::html_to_text;
use crate::source::MailSource;
use crate::PipelineError;

/// Mail source over a directory of message fixture files, in file-name
/// order.
#[derive(Debug)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl MailSource for FileSource {
    async fn fetch(&self, max: usize) -> Result<Vec<EmailMessage>, PipelineError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| PipelineError::Io {
            path: self.dir.display().to_string(),
            source: e,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut messages = Vec::new();
        for path in paths.into_iter().take(max) {
            match read_message(&path) {
                Ok(message) => messages.push(message),
                // One unreadable file must not sink the batch.
                Err(e) => tracing::warn!(error = %e, "skipping unreadable mailbox entry"),
            }
        }

        Ok(messages)
    }
}

/// Read and decode one message fixture file.
///
/// The message id is the file stem. Missing headers become empty strings so
/// downstream extraction degrades instead of failing.
///
/// # Errors
///
/// Returns [`PipelineError::Io`] if the file cannot be read.
pub fn read_message(path: &Path) -> Result<EmailMessage, PipelineError> {
    let text = std::fs::read_to_string(path).map_err(|e| PipelineError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let id = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("message")
        .to_string();
    Ok(parse_fixture(id, &text))
}

fn parse_fixture(id: String, text: &str) -> EmailMessage {
    let mut from = String::new();
    let mut subject = String::new();
    let mut date: Option<DateTime<Utc>> = None;
    let mut content_type = String::new();

    let mut lines = text.lines();
    for line in lines.by_ref() {
        if line.trim().is_empty() {
            break;
        }
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        match name.trim().to_lowercase().as_str() {
            "from" => from = value.trim().to_string(),
            "subject" => subject = value.trim().to_string(),
            "date" => {
                date = DateTime::parse_from_rfc2822(value.trim())
                    .ok()
                    .map(|d| d.with_timezone(&Utc));
            }
            "content-type" => content_type = value.trim().to_lowercase(),
            _ => {}
        }
    }

    let body = lines.collect::<Vec<_>>().join("\n");
    let body = if content_type.contains("html") {
        html_to_text(&body)
    } else {
        body
    };

    EmailMessage {
        id,
        from,
        subject,
        body,
        date,
    }
}
