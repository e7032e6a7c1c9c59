//! [`WorkspaceDirectory`] backed by an i3-compatible window manager.

use wstag_core::tree::MAX_TREE_DEPTH;
use wstag_core::{Config, TagError, TransportKind, WindowNode, Workspace, WorkspaceDirectory};

use crate::error::IpcError;
use crate::paths::socket_path;
use crate::protocol::{parse_command_reply, rename_command, MessageType};
use crate::transport::{CommandTransport, SocketTransport, Transport};

pub struct I3Directory<T> {
    transport: T,
}

impl<T: Transport> I3Directory<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn workspaces(&self) -> Result<Vec<Workspace>, IpcError> {
        let payload = self.transport.request(MessageType::GetWorkspaces, "")?;
        let workspaces: Vec<Workspace> = serde_json::from_slice(&payload)?;
        tracing::debug!(count = workspaces.len(), "workspaces listed");
        Ok(workspaces)
    }

    fn container_tree(&self) -> Result<WindowNode, IpcError> {
        let payload = self.transport.request(MessageType::GetTree, "")?;
        // Parse the raw shape first so a depth-guard failure keeps its own variant.
        let raw: wstag_core::tree::RawNode =
            serde_json::from_slice(&payload).map_err(tree_parse_error)?;
        Ok(WindowNode::try_from(raw)?)
    }

    fn run_rename(&self, workspace: &Workspace, new_name: &str) -> Result<(), TagError> {
        let command = rename_command(&workspace.name, new_name);
        let payload = self.transport.request(MessageType::RunCommand, &command)?;
        let reply = parse_command_reply(&payload)?;
        if !reply.success {
            return Err(TagError::RenameFailed {
                from: workspace.name.clone(),
                to: new_name.to_string(),
                reason: reply
                    .error
                    .unwrap_or_else(|| "no reason given".to_string()),
            });
        }
        tracing::info!(from = %workspace.name, to = %new_name, "workspace renamed");
        Ok(())
    }
}

// serde_json gives up on nesting past its own limit before the depth guard
// runs; that is still a tree that is too deep.
fn tree_parse_error(err: serde_json::Error) -> IpcError {
    if err.to_string().starts_with("recursion limit exceeded") {
        return IpcError::Tree(TagError::TreeTooDeep {
            max: MAX_TREE_DEPTH,
        });
    }
    IpcError::Json(err)
}

impl I3Directory<Box<dyn Transport>> {
    /// Pick the transport named in `config`. The socket path is resolved here;
    /// nothing is sent until the first request.
    pub fn from_config(config: &Config) -> Result<Self, IpcError> {
        let transport: Box<dyn Transport> = match config.transport {
            TransportKind::Socket => {
                Box::new(SocketTransport::new(socket_path(config.socket_path.as_deref())?))
            }
            TransportKind::I3Msg => Box::new(CommandTransport::default()),
        };
        Ok(Self::new(transport))
    }
}

impl<T: Transport> WorkspaceDirectory for I3Directory<T> {
    fn list_all(&self) -> Result<Vec<Workspace>, TagError> {
        Ok(self.workspaces()?)
    }

    fn tree(&self) -> Result<WindowNode, TagError> {
        Ok(self.container_tree()?)
    }

    fn rename(&self, workspace: &Workspace, new_name: &str) -> Result<(), TagError> {
        self.run_rename(workspace, new_name)
    }
}
