//! Window manager IPC: wire codec, transports, and the i3-backed workspace directory.

mod error;
pub mod directory;
pub mod paths;
pub mod protocol;
pub mod transport;

pub use directory::I3Directory;
pub use error::IpcError;
pub use paths::socket_path;
pub use protocol::{rename_command, CommandReply, MessageType};
pub use transport::{CommandTransport, SocketTransport, Transport};
