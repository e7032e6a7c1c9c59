//! i3 IPC wire format.
//!
//! ```text
//! "i3-ipc" | u32 payload length | u32 message type | payload
//! ```
//!
//! Integers are in native byte order, as the socket never leaves the machine.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::IpcError;

pub const MAGIC: &[u8; 6] = b"i3-ipc";
pub const HEADER_LEN: usize = 14;

/// Upper bound on a single reply; a full `get_tree` is well below this.
pub const MAX_PAYLOAD: u32 = 64 * 1024 * 1024;

/// Request types wstag sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    RunCommand,
    GetWorkspaces,
    GetTree,
}

impl MessageType {
    pub fn code(self) -> u32 {
        match self {
            MessageType::RunCommand => 0,
            MessageType::GetWorkspaces => 1,
            MessageType::GetTree => 4,
        }
    }

    /// Name used by `i3-msg -t`.
    pub fn i3_msg_name(self) -> &'static str {
        match self {
            MessageType::RunCommand => "command",
            MessageType::GetWorkspaces => "get_workspaces",
            MessageType::GetTree => "get_tree",
        }
    }
}

/// One element of a `RUN_COMMAND` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Frame `payload` as a message of type `kind`.
pub fn encode_message(kind: MessageType, payload: &[u8]) -> Result<Vec<u8>, IpcError> {
    let len = u32::try_from(payload.len())
        .map_err(|_| IpcError::Protocol(format!("payload too large: {} bytes", payload.len())))?;
    let mut buf = Vec::with_capacity(HEADER_LEN + payload.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&len.to_ne_bytes());
    buf.extend_from_slice(&kind.code().to_ne_bytes());
    buf.extend_from_slice(payload);
    Ok(buf)
}

pub fn write_message<W: Write>(
    writer: &mut W,
    kind: MessageType,
    payload: &[u8],
) -> std::io::Result<()> {
    let frame = encode_message(kind, payload)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    writer.write_all(&frame)?;
    writer.flush()
}

/// Read one reply frame and check it answers `expected`. Returns the payload.
pub fn read_reply<R: Read>(reader: &mut R, expected: MessageType) -> Result<Vec<u8>, IpcError> {
    let mut header = [0u8; HEADER_LEN];
    reader
        .read_exact(&mut header)
        .map_err(|e| IpcError::Protocol(format!("reading reply header: {e}")))?;

    if header[..6] != MAGIC[..] {
        return Err(IpcError::Protocol("reply does not start with i3-ipc magic".into()));
    }
    let len = u32::from_ne_bytes([header[6], header[7], header[8], header[9]]);
    let kind = u32::from_ne_bytes([header[10], header[11], header[12], header[13]]);

    if kind != expected.code() {
        return Err(IpcError::Protocol(format!(
            "expected reply type {}, got {kind}",
            expected.code()
        )));
    }
    if len > MAX_PAYLOAD {
        return Err(IpcError::Protocol(format!("reply of {len} bytes exceeds limit")));
    }

    let mut payload = vec![0u8; len as usize];
    reader
        .read_exact(&mut payload)
        .map_err(|e| IpcError::Protocol(format!("reading {len}-byte reply payload: {e}")))?;
    Ok(payload)
}

/// `rename workspace "<old>" to "<new>"`, quoting both names.
pub fn rename_command(old: &str, new: &str) -> String {
    format!("rename workspace {} to {}", quote(old), quote(new))
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Interpret a `RUN_COMMAND` reply: the first element decides.
pub fn parse_command_reply(payload: &[u8]) -> Result<CommandReply, IpcError> {
    let replies: Vec<CommandReply> = serde_json::from_slice(payload)?;
    replies
        .into_iter()
        .next()
        .ok_or_else(|| IpcError::Protocol("empty command reply".into()))
}
