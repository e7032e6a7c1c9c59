use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::IpcError;

pub const I3SOCK_ENV: &str = "I3SOCK";
pub const SWAYSOCK_ENV: &str = "SWAYSOCK";

/// Locate the window manager's IPC socket.
///
/// Order: explicit override, `$I3SOCK`, `$SWAYSOCK`, `i3 --get-socketpath`.
pub fn socket_path(explicit: Option<&Path>) -> Result<PathBuf, IpcError> {
    resolve_socket_path(explicit, |key| std::env::var(key).ok(), ask_i3)
}

/// [`socket_path`] with injectable environment and `i3` lookups.
pub fn resolve_socket_path(
    explicit: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
    ask_wm: impl FnOnce() -> Option<String>,
) -> Result<PathBuf, IpcError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    for key in [I3SOCK_ENV, SWAYSOCK_ENV] {
        if let Some(value) = env(key).filter(|v| !v.trim().is_empty()) {
            tracing::debug!(source = key, path = %value, "using IPC socket");
            return Ok(PathBuf::from(value));
        }
    }
    ask_wm()
        .map(|p| PathBuf::from(p.trim()))
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(IpcError::SocketNotFound)
}

fn ask_i3() -> Option<String> {
    let output = Command::new("i3").arg("--get-socketpath").output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = resolve_socket_path(
            Some(Path::new("/tmp/explicit.sock")),
            |_| Some("/tmp/env.sock".into()),
            || Some("/tmp/i3.sock".into()),
        )
        .expect("path");
        assert_eq!(path, PathBuf::from("/tmp/explicit.sock"));
    }

    #[test]
    fn i3sock_before_swaysock() {
        let path = resolve_socket_path(
            None,
            |k| Some(format!("/run/{k}")),
            || None,
        )
        .expect("path");
        assert_eq!(path, PathBuf::from("/run/I3SOCK"));
    }

    #[test]
    fn swaysock_used_when_i3sock_blank() {
        let path = resolve_socket_path(
            None,
            |k| if k == SWAYSOCK_ENV { Some("/run/sway.sock".into()) } else { Some(" ".into()) },
            || None,
        )
        .expect("path");
        assert_eq!(path, PathBuf::from("/run/sway.sock"));
    }

    #[test]
    fn falls_back_to_asking_i3() {
        let from_i3 = || Some(String::from("/run/user/1000/i3/ipc.sock\n"));
        let path = resolve_socket_path(None, |_| None, from_i3).expect("path");
        assert_eq!(path, PathBuf::from("/run/user/1000/i3/ipc.sock"));
    }

    #[test]
    fn nothing_found() {
        let err = resolve_socket_path(None, |_| None, || None).unwrap_err();
        assert!(matches!(err, IpcError::SocketNotFound));
    }
}
