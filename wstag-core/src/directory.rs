//! Access to the window manager's workspaces.
//!
//! [`WorkspaceDirectory`] is the seam between tag logic and the IPC transport.
//! Implementors supply the three raw requests; focus and number resolution are
//! provided on top of `list_all`.

use crate::error::TagError;
use crate::tree::WindowNode;
use crate::types::Workspace;

pub trait WorkspaceDirectory {
    /// Query the window manager's workspace list once.
    fn list_all(&self) -> Result<Vec<Workspace>, TagError>;

    /// Query the full container tree once.
    fn tree(&self) -> Result<WindowNode, TagError>;

    /// Rename `workspace` to `new_name`. Must return [`TagError::RenameFailed`]
    /// when the window manager reports failure.
    fn rename(&self, workspace: &Workspace, new_name: &str) -> Result<(), TagError>;

    /// The single focused workspace.
    fn focused(&self) -> Result<Workspace, TagError> {
        select_focused(self.list_all()?)
    }

    /// The single workspace numbered `num`.
    fn by_number(&self, num: i32) -> Result<Workspace, TagError> {
        select_by_number(self.list_all()?, num)
    }
}

impl<D: WorkspaceDirectory + ?Sized> WorkspaceDirectory for &D {
    fn list_all(&self) -> Result<Vec<Workspace>, TagError> {
        (**self).list_all()
    }

    fn tree(&self) -> Result<WindowNode, TagError> {
        (**self).tree()
    }

    fn rename(&self, workspace: &Workspace, new_name: &str) -> Result<(), TagError> {
        (**self).rename(workspace, new_name)
    }
}

pub fn select_focused(workspaces: Vec<Workspace>) -> Result<Workspace, TagError> {
    let mut focused: Vec<Workspace> = workspaces.into_iter().filter(|w| w.focused).collect();
    match focused.len() {
        0 => Err(TagError::NoFocusedWorkspace),
        1 => Ok(focused.remove(0)),
        count => Err(TagError::AmbiguousFocus { count }),
    }
}

pub fn select_by_number(workspaces: Vec<Workspace>, num: i32) -> Result<Workspace, TagError> {
    let mut matching: Vec<Workspace> = workspaces.into_iter().filter(|w| w.num == num).collect();
    match matching.len() {
        0 => Err(TagError::NotFound { num }),
        1 => Ok(matching.remove(0)),
        count => Err(TagError::AmbiguousNumber { num, count }),
    }
}
