//! Socket transport against an in-process fake i3 server.

use std::io::{Read, Write};
use std::os::unix::net::UnixListener;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;
use wstag_core::{TagError, Workspace, WorkspaceDirectory};
use wstag_ipc::{I3Directory, MessageType, SocketTransport};

// ---------------------------------------------------------------------------
// Fake server
// ---------------------------------------------------------------------------

/// Serve `replies.len()` connections, answering each with the next reply and
/// forwarding `(type, payload)` of every request.
fn spawn_fake_i3(
    dir: &TempDir,
    replies: Vec<String>,
) -> (PathBuf, mpsc::Receiver<(u32, String)>) {
    let path = dir.path().join("ipc.sock");
    let listener = UnixListener::bind(&path).expect("bind");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for reply in replies {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut header = [0u8; 14];
            stream.read_exact(&mut header).expect("header");
            assert_eq!(&header[..6], b"i3-ipc");
            let len = u32::from_ne_bytes(header[6..10].try_into().expect("len"));
            let kind = u32::from_ne_bytes(header[10..14].try_into().expect("kind"));
            let mut payload = vec![0u8; len as usize];
            stream.read_exact(&mut payload).expect("payload");
            tx.send((kind, String::from_utf8(payload).expect("utf8"))).expect("send");

            let mut frame = Vec::new();
            frame.extend_from_slice(b"i3-ipc");
            frame.extend_from_slice(&(reply.len() as u32).to_ne_bytes());
            frame.extend_from_slice(&kind.to_ne_bytes());
            frame.extend_from_slice(reply.as_bytes());
            stream.write_all(&frame).expect("reply");
        }
    });

    (path, rx)
}

fn recv(rx: &mpsc::Receiver<(u32, String)>) -> (u32, String) {
    rx.recv_timeout(Duration::from_secs(5)).expect("request seen by fake server")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn list_then_rename_over_socket() {
    let dir = TempDir::new().expect("tempdir");
    let (path, rx) = spawn_fake_i3(
        &dir,
        vec![
            r#"[{"num":3,"name":"3","focused":true,"visible":true,"output":"eDP-1"}]"#.into(),
            r#"[{"success":true}]"#.into(),
        ],
    );
    let directory = I3Directory::new(SocketTransport::new(path));

    let ws = directory.focused().expect("focused");
    assert_eq!(ws, Workspace { output: Some("eDP-1".into()), ..Workspace::new(3, "3", true) });
    assert_eq!(recv(&rx), (MessageType::GetWorkspaces.code(), String::new()));

    directory.rename(&ws, "3 M").expect("rename");
    assert_eq!(
        recv(&rx),
        (MessageType::RunCommand.code(), r#"rename workspace "3" to "3 M""#.to_string())
    );
}

#[test]
fn refused_rename_surfaces_as_rename_failed() {
    let dir = TempDir::new().expect("tempdir");
    let (path, _rx) = spawn_fake_i3(
        &dir,
        vec![r#"[{"success":false,"error":"rename refused"}]"#.into()],
    );
    let directory = I3Directory::new(SocketTransport::new(path));

    let err = directory
        .rename(&Workspace::new(1, "1", true), "1 W")
        .unwrap_err();
    assert!(matches!(err, TagError::RenameFailed { .. }), "got: {err}");
    assert!(err.to_string().contains("rename refused"));
}

#[test]
fn tree_request_uses_get_tree() {
    let dir = TempDir::new().expect("tempdir");
    let (path, rx) = spawn_fake_i3(
        &dir,
        vec![r#"{"name":"root","window":null,"nodes":[]}"#.into()],
    );
    let directory = I3Directory::new(SocketTransport::new(path));
    let tree = directory.tree().expect("tree");
    assert_eq!(tree.name(), Some("root"));
    assert_eq!(recv(&rx).0, MessageType::GetTree.code());
}
