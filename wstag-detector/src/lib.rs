//! Window classification for `wstag-detector`.
//!
//! [`WorkspaceWindowIndex::build`] flattens the window manager's container tree
//! into workspace number → leaf windows. [`Classifier`] then infers tag names
//! from each window's role and class, unioned over the workspace.

pub mod classify;
pub mod index;

use thiserror::Error;

pub use classify::{Classifier, Matcher, Rule};
pub use index::WorkspaceWindowIndex;

/// Errors from tree indexing and classification.
#[derive(Debug, Error)]
pub enum DetectError {
    /// None of the rules matched any window on the workspace.
    #[error("could not infer any tags from {windows} window(s) on this workspace")]
    NoTagsInferred { windows: usize },

    /// A configured rule is missing its matcher or sets more than one.
    #[error("invalid classification rule for tag '{tag}': {message}")]
    InvalidRule { tag: String, message: String },
}
