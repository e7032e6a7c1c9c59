//! # wstag-mutator
//!
//! Orchestrates a single tag operation: resolve the target workspace, compute
//! its new symbol set, encode, rename. Shared by the CLI and the tests.

pub mod error;
pub mod mutator;
pub mod operation;

pub use error::MutateError;
pub use mutator::{MutationOutcome, TagMutator};
pub use operation::{apply, Operation, Target};
