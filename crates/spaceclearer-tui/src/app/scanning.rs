//! Background directory scanning.

use std::path::PathBuf;
use std::sync::{MutexGuard, PoisonError};

use tokio::sync::{broadcast, mpsc};

use spaceclearer_session::{ScanError, Session, SharedSession};

use super::constants::SCAN_CHANNEL_SIZE;
use super::state::ScanResult;

/// Lock the session, recovering it if a previous holder panicked.
pub fn lock(session: &SharedSession) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Select `path` on the session from a blocking task.
///
/// Returns a receiver that gets progress updates and the final result.
pub fn start_scan(session: SharedSession, path: PathBuf) -> mpsc::Receiver<ScanResult> {
    let (tx, rx) = mpsc::channel(SCAN_CHANNEL_SIZE);
    let mut progress_rx = lock(&session).subscribe();

    tokio::spawn(async move {
        let tx_progress = tx.clone();
        let progress_task = tokio::spawn(async move {
            loop {
                match progress_rx.recv().await {
                    Ok(progress) => {
                        if tx_progress.send(ScanResult::Progress(progress)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        let scan_path = path.clone();
        let result = tokio::task::spawn_blocking(move || {
            let mut session = lock(&session);
            session.select_directory(&scan_path).map(|files| files.len())
        })
        .await
        .unwrap_or_else(|e| Err(ScanError::io(&path, std::io::Error::other(e.to_string()))));

        progress_task.abort();
        let _ = tx.send(ScanResult::Complete { path, result }).await;
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_scan_completes_and_updates_session() {
        let temp = tempfile::TempDir::new().unwrap();
        fs::write(temp.path().join("a"), "aaaa").unwrap();
        fs::write(temp.path().join("b"), "bb").unwrap();

        let session = Session::new().shared();
        let mut rx = start_scan(session.clone(), temp.path().to_path_buf());

        let mut outcome = None;
        while let Some(msg) = rx.recv().await {
            if let ScanResult::Complete { result, .. } = msg {
                outcome = Some(result);
                break;
            }
        }

        assert_eq!(outcome.unwrap().unwrap(), 2);
        assert_eq!(lock(&session).files().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_scan_reports_access_denied() {
        let temp = tempfile::TempDir::new().unwrap();
        let session = Session::new().shared();
        let mut rx = start_scan(session.clone(), temp.path().join("missing"));

        let mut outcome = None;
        while let Some(msg) = rx.recv().await {
            if let ScanResult::Complete { result, .. } = msg {
                outcome = Some(result);
            }
        }

        assert!(matches!(outcome, Some(Err(ScanError::AccessDenied { .. }))));
        assert!(lock(&session).root().is_none());
    }
}
