use std::fs;

use spaceclearer_scan::{DirectoryScanner, ScanConfig, ScanError};
use tempfile::TempDir;

fn write_sized(dir: &std::path::Path, name: &str, size: usize) {
    fs::write(dir.join(name), vec![b'x'; size]).unwrap();
}

#[test]
fn test_sizes_scenario_single_page() {
    let temp = TempDir::new().unwrap();
    write_sized(temp.path(), "ten", 10);
    write_sized(temp.path(), "fifty", 50);
    write_sized(temp.path(), "five", 5);
    fs::create_dir(temp.path().join("nested")).unwrap();
    write_sized(&temp.path().join("nested"), "two_hundred", 200);

    let files = DirectoryScanner::new()
        .scan_sorted(&ScanConfig::new(temp.path()))
        .unwrap();

    let sizes: Vec<u64> = files.iter().map(|e| e.size).collect();
    assert_eq!(sizes, vec![200, 50, 10, 5]);
}

#[test]
fn test_directories_are_not_listed() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("a/b/c")).unwrap();
    write_sized(&temp.path().join("a/b/c"), "deep", 3);

    let files = DirectoryScanner::new()
        .scan(&ScanConfig::new(temp.path()))
        .unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name(), "deep");
}

#[test]
fn test_empty_directory_gives_empty_list() {
    let temp = TempDir::new().unwrap();
    let files = DirectoryScanner::new()
        .scan_sorted(&ScanConfig::new(temp.path()))
        .unwrap();
    assert!(files.is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlinks_skipped_by_default() {
    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    write_sized(outside.path(), "target", 100);
    write_sized(temp.path(), "real", 1);
    std::os::unix::fs::symlink(outside.path().join("target"), temp.path().join("link")).unwrap();
    std::os::unix::fs::symlink(outside.path(), temp.path().join("linkdir")).unwrap();

    let files = DirectoryScanner::new()
        .scan(&ScanConfig::new(temp.path()))
        .unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name(), "real");
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_access_denied() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let locked = temp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    write_sized(&locked, "inside", 4);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read the directory regardless of its mode.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = DirectoryScanner::new().scan(&ScanConfig::new(&locked));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(matches!(result, Err(ScanError::AccessDenied { .. })));
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_is_access_denied() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("ok")).unwrap();
    write_sized(&temp.path().join("ok"), "a", 4);
    let locked = temp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    write_sized(&locked, "b", 8);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read the directory regardless of its mode.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = DirectoryScanner::new().scan(&ScanConfig::new(temp.path()));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.unwrap_err();
    assert!(matches!(err, ScanError::AccessDenied { .. }));
    assert!(err.path().is_some_and(|p| p.ends_with("locked")));
}
