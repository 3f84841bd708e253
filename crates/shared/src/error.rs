use thiserror::Error;

use crate::domain::ShoeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("shoe {0} not found")]
    NotFound(ShoeId),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("malformed seed dataset: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("seed dataset repeats id {0}")]
    DuplicateId(ShoeId),
}
