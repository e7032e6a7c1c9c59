use std::path::PathBuf;

use thiserror::Error;
use wstag_core::TagError;

/// Error surface for the window manager transport.
#[derive(Debug, Error)]
pub enum IpcError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IPC protocol error: {0}")]
    Protocol(String),

    #[error("no window manager socket found (tried I3SOCK, SWAYSOCK, `i3 --get-socketpath`)")]
    SocketNotFound,

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("tree error: {0}")]
    Tree(#[from] TagError),
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> IpcError {
    IpcError::Io {
        path: path.into(),
        source,
    }
}

impl From<IpcError> for TagError {
    fn from(err: IpcError) -> Self {
        match err {
            IpcError::Tree(inner) => inner,
            other => TagError::Transport(Box::new(other)),
        }
    }
}
