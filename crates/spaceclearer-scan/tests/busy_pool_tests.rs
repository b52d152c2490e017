//! Runs in its own test binary: it occupies every thread of the global
//! rayon pool.

use std::fs;
use std::sync::{Arc, Barrier, RwLock};

use spaceclearer_scan::{DirectoryScanner, ScanConfig, ScanError};
use tempfile::TempDir;

#[test]
fn test_busy_thread_pool_fails_scan() {
    let temp = TempDir::new().unwrap();
    for i in 0..15 {
        let dir = temp.path().join(format!("dir{i:02}"));
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("file"), vec![b'x'; i + 1]).unwrap();
    }

    let workers = rayon::current_num_threads();
    let started = Arc::new(Barrier::new(workers + 1));
    let gate = Arc::new(RwLock::new(()));
    let hold = gate.write().unwrap();

    for _ in 0..workers {
        let started = Arc::clone(&started);
        let gate = Arc::clone(&gate);
        rayon::spawn(move || {
            started.wait();
            let _wait = gate.read();
        });
    }
    started.wait();

    let result = DirectoryScanner::new().scan(&ScanConfig::new(temp.path()));
    drop(hold);

    assert!(matches!(result, Err(ScanError::AccessDenied { .. })));
}
