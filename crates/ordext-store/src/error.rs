use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("order record is not storable: {0}")]
    InvalidRecord(String),

    #[error("store backend error: {0}")]
    Backend(String),
}
