//! Request/response transports to the window manager.
//!
//! One request per call, no retries. A hang in the window manager hangs the
//! caller.

use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{io_err, IpcError};
use crate::protocol::{read_reply, write_message, MessageType};

pub trait Transport {
    /// Send one request and return the raw JSON reply payload.
    fn request(&self, kind: MessageType, payload: &str) -> Result<Vec<u8>, IpcError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn request(&self, kind: MessageType, payload: &str) -> Result<Vec<u8>, IpcError> {
        (**self).request(kind, payload)
    }
}

/// Binary IPC over the window manager's Unix socket, one connection per request.
#[derive(Debug, Clone)]
pub struct SocketTransport {
    path: PathBuf,
}

impl SocketTransport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for SocketTransport {
    fn request(&self, kind: MessageType, payload: &str) -> Result<Vec<u8>, IpcError> {
        let mut stream = UnixStream::connect(&self.path).map_err(|e| io_err(&self.path, e))?;

        write_message(&mut stream, kind, payload.as_bytes()).map_err(|e| io_err(&self.path, e))?;
        let reply = read_reply(&mut stream, kind)?;
        tracing::debug!(
            request = kind.i3_msg_name(),
            sent = payload.len(),
            received = reply.len(),
            "IPC round trip"
        );
        Ok(reply)
    }
}

/// Shells out to `i3-msg` (or a compatible program such as `swaymsg`).
#[derive(Debug, Clone)]
pub struct CommandTransport {
    program: String,
}

impl CommandTransport {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CommandTransport {
    fn default() -> Self {
        Self::new("i3-msg")
    }
}

impl Transport for CommandTransport {
    fn request(&self, kind: MessageType, payload: &str) -> Result<Vec<u8>, IpcError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-t").arg(kind.i3_msg_name());
        if !payload.is_empty() {
            cmd.arg(payload);
        }

        let output = cmd.output().map_err(|e| io_err(&self.program, e))?;
        // i3-msg exits non-zero when a command fails but still prints the JSON reply.
        if !output.status.success() && output.stdout.is_empty() {
            return Err(IpcError::CommandFailed {
                command: format!("{} -t {}", self.program, kind.i3_msg_name()),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        tracing::debug!(
            request = kind.i3_msg_name(),
            received = output.stdout.len(),
            "{} round trip",
            self.program
        );
        Ok(output.stdout)
    }
}
