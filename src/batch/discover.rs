//! Recursive problem file discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::BatchError;

/// Lists every regular file under `dir`, recursively, in sorted path order.
///
/// Symbolic links are skipped, whatever they point to, so each file is
/// listed once and a link back up the tree cannot loop.
///
/// Failing to read `dir` itself is an error. Unreadable entries or
/// subdirectories below it are logged and skipped.
pub fn discover_problems(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let entries = std::fs::read_dir(dir).map_err(|source| BatchError::Walk {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    collect(entries, &mut files);
    files.sort();
    Ok(files)
}

fn collect(entries: std::fs::ReadDir, files: &mut Vec<PathBuf>) {
    for entry in entries {
        let (path, file_type) = match entry.and_then(|e| Ok((e.path(), e.file_type()?))) {
            Ok(found) => found,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };

        if file_type.is_file() {
            files.push(path);
        } else if file_type.is_dir() {
            match std::fs::read_dir(&path) {
                Ok(nested) => collect(nested, files),
                Err(err) => warn!(path = %path.display(), error = %err, "skipping unreadable directory"),
            }
        } else if file_type.is_symlink() {
            debug!(path = %path.display(), "skipping symbolic link");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_recursive_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        std::fs::create_dir_all(root.join("sub1")).unwrap();
        std::fs::create_dir_all(root.join("sub2/deeper")).unwrap();
        std::fs::create_dir_all(root.join("empty")).unwrap();
        std::fs::write(root.join("b.txt"), "").unwrap();
        std::fs::write(root.join("a"), "").unwrap();
        std::fs::write(root.join("sub2/deeper/c.txt"), "").unwrap();
        std::fs::write(root.join("sub1/d.dat"), "").unwrap();

        let files = discover_problems(root).unwrap();
        assert_eq!(
            files,
            vec![
                root.join("a"),
                root.join("b.txt"),
                root.join("sub1/d.dat"),
                root.join("sub2/deeper/c.txt"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_ignores_directory_links() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("a.txt"), "").unwrap();
        std::fs::write(root.join("sub/b.txt"), "").unwrap();
        symlink(root, root.join("loop")).unwrap();
        symlink(root.join("sub"), root.join("sub_link")).unwrap();

        let files = discover_problems(root).unwrap();
        assert_eq!(files, vec![root.join("a.txt"), root.join("sub/b.txt")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_skips_file_links() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        std::fs::write(root.join("a.txt"), "").unwrap();
        symlink(root.join("a.txt"), root.join("b.txt")).unwrap();
        symlink(root.join("missing.txt"), root.join("c.txt")).unwrap();

        let files = discover_problems(root).unwrap();
        assert_eq!(files, vec![root.join("a.txt")]);
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");
        let err = discover_problems(&missing).unwrap_err();
        assert!(matches!(err, BatchError::Walk { ref path, .. } if path == &missing));
    }
}
