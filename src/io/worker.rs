use crate::entry::FileEntry;
use crate::state::Pane;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use super::directory::read_directory;

pub enum IoCommand {
    LoadDirectory {
        pane: Pane,
        path: PathBuf,
        show_hidden: bool,
        /// Entry to put the cursor on once loaded (e.g. the directory we came up from).
        select: Option<PathBuf>,
    },
}

pub enum IoResult {
    DirectoryLoaded {
        pane: Pane,
        path: PathBuf,
        entries: Vec<FileEntry>,
        select: Option<PathBuf>,
    },
    Error {
        pane: Pane,
        path: PathBuf,
        message: String,
    },
}

/// Runs directory reads off the UI thread. `on_result` wakes the UI after each result.
pub fn spawn_worker<F>(on_result: F) -> (Sender<IoCommand>, Receiver<IoResult>)
where
    F: Fn() + Send + 'static,
{
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            let result = match cmd {
                IoCommand::LoadDirectory {
                    pane,
                    path,
                    show_hidden,
                    select,
                } => match read_directory(&path, show_hidden) {
                    Ok(entries) => {
                        tracing::debug!(pane = pane.name(), path = %path.display(), count = entries.len(), "directory loaded");
                        IoResult::DirectoryLoaded {
                            pane,
                            path,
                            entries,
                            select,
                        }
                    }
                    Err(e) => {
                        tracing::warn!(pane = pane.name(), path = %path.display(), error = %e, "directory load failed");
                        let message = format!("Cannot open {}: {}", path.display(), e);
                        IoResult::Error {
                            pane,
                            path,
                            message,
                        }
                    }
                },
            };
            if res_tx.send(result).is_err() {
                break;
            }
            on_result();
        }
    });

    (cmd_tx, res_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    #[test]
    fn loads_directory_in_background() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("one.txt"), b"1").expect("write");

        let (tx, rx) = spawn_worker(|| {});
        tx.send(IoCommand::LoadDirectory {
            pane: Pane::Right,
            path: dir.path().to_path_buf(),
            show_hidden: false,
            select: None,
        })
        .expect("send");

        match rx.recv_timeout(Duration::from_secs(5)).expect("result") {
            IoResult::DirectoryLoaded { pane, entries, .. } => {
                assert_eq!(pane, Pane::Right);
                assert_eq!(entries.len(), 1);
            }
            IoResult::Error { message, .. } => panic!("unexpected error: {}", message),
        }
    }

    #[test]
    fn reports_errors_per_pane() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (tx, rx) = spawn_worker(|| {});
        tx.send(IoCommand::LoadDirectory {
            pane: Pane::Left,
            path: dir.path().join("missing"),
            show_hidden: false,
            select: None,
        })
        .expect("send");

        match rx.recv_timeout(Duration::from_secs(5)).expect("result") {
            IoResult::Error { pane, path, message } => {
                assert_eq!(pane, Pane::Left);
                assert_eq!(path, dir.path().join("missing"));
                assert!(message.starts_with("Cannot open"));
            }
            IoResult::DirectoryLoaded { .. } => panic!("missing directory loaded"),
        }
    }
}
