//! Error types for wstag-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while resolving, decoding, or renaming a workspace.
#[derive(Debug, Error)]
pub enum TagError {
    /// A tag name is not part of the registry. Carries the full vocabulary, sorted.
    #[error("unknown tag '{name}'. Valid are:\n  {}", .valid.join(" "))]
    UnknownTag { name: String, valid: Vec<String> },

    /// The window manager reported more than one focused workspace.
    #[error("more than one focused workspace ({count} reported)")]
    AmbiguousFocus { count: usize },

    /// The window manager reported no focused workspace at all.
    #[error("no focused workspace reported by the window manager")]
    NoFocusedWorkspace,

    /// The same number is assigned to several workspaces.
    #[error("number {num} assigned to more than one workspace ({count} found)")]
    AmbiguousNumber { num: i32, count: usize },

    /// No workspace carries the requested number.
    #[error("no workspace with number {num}")]
    NotFound { num: i32 },

    /// The window manager refused the rename request.
    #[error("renaming workspace '{from}' to '{to}' was not successful: {reason}")]
    RenameFailed {
        from: String,
        to: String,
        reason: String,
    },

    /// The container tree nests deeper than [`crate::tree::MAX_TREE_DEPTH`].
    #[error("container tree exceeds maximum depth of {max}")]
    TreeTooDeep { max: usize },

    /// Failure in the transport talking to the window manager.
    #[error("window manager IPC error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Underlying I/O failure while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on config load, with the offending file.
    #[error("failed to parse config at {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An explicitly requested config file does not exist.
    #[error("config not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}
