//! Shared error types for the services crate.

use thiserror::Error;

use hub_core::model::{ImageRefError, QuestionError, QuestionId, ReportError};
use storage::repository::StorageError;

/// Errors emitted while loading the bundled question dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("question dataset could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question {id} is invalid: {source}")]
    Invalid {
        id: QuestionId,
        #[source]
        source: QuestionError,
    },

    #[error("question {id}: option {label} is not text")]
    OptionNotText { id: QuestionId, label: String },

    #[error("question {id}: bad image reference: {source}")]
    Image {
        id: QuestionId,
        #[source]
        source: ImageRefError,
    },

    #[error("question dataset is empty")]
    Empty,
}

/// Errors emitted by `PetBoardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PetBoardError {
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
