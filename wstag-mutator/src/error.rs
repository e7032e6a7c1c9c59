//! Error types for wstag-mutator.

use thiserror::Error;

use wstag_core::TagError;
use wstag_detector::DetectError;

/// All errors that can end a tag operation. None are retried.
#[derive(Debug, Error)]
pub enum MutateError {
    /// Registry, directory, or rename failure.
    #[error(transparent)]
    Tag(#[from] TagError),

    /// Automatic classification failed.
    #[error(transparent)]
    Detect(#[from] DetectError),
}
