use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read mailbox entry {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
