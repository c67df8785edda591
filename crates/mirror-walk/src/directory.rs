//! Output directory creation and input-to-output path mapping.

use std::fs;
use std::path::{Component, Path, PathBuf};

use mirror_core::WalkError;

/// Ensure `path` exists as a directory, creating missing ancestors.
///
/// An already existing directory is success. A non-directory occupying the
/// path is an error.
pub fn ensure_directory(path: &Path) -> Result<(), WalkError> {
    fs::create_dir_all(path).map_err(|source| WalkError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })
}

/// Express `entry` relative to `root`, comparing path components.
pub fn relative_to(root: &Path, entry: &Path) -> Result<PathBuf, WalkError> {
    entry
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| WalkError::OutsideRoot {
            path: entry.to_path_buf(),
            root: root.to_path_buf(),
        })
}

/// Map an entry under `input_root` to its counterpart under `output_root`.
pub fn mirror_path(output_root: &Path, input_root: &Path, entry: &Path) -> Result<PathBuf, WalkError> {
    Ok(output_root.join(relative_to(input_root, entry)?))
}

/// Resolve `path` to an absolute path without symlinks or `..`, even when
/// its trailing components do not exist yet.
pub(crate) fn resolve_path(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = path.canonicalize() {
        return Some(resolved);
    }
    let parent = path.parent()?;
    let base = if parent.as_os_str().is_empty() {
        std::env::current_dir().ok()?
    } else {
        resolve_path(parent)?
    };
    match path.components().next_back()? {
        Component::Normal(name) => Some(base.join(name)),
        Component::ParentDir => base.parent().map(Path::to_path_buf),
        _ => Some(base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a");

        ensure_directory(&dir).unwrap();
        ensure_directory(&dir).unwrap();

        assert!(dir.is_dir());
        let count = fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_ensure_directory_creates_ancestors() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b/c");

        ensure_directory(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_directory_file_collision() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("taken");
        fs::write(&path, "file").unwrap();

        let err = ensure_directory(&path).unwrap_err();

        assert!(matches!(err, WalkError::CreateDirectory { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
    }

    #[test]
    fn test_relative_to() {
        let rel = relative_to(Path::new("/in"), Path::new("/in/sub/c.jpg")).unwrap();
        assert_eq!(rel, PathBuf::from("sub/c.jpg"));

        let rel = relative_to(Path::new("./in"), Path::new("./in/a.png")).unwrap();
        assert_eq!(rel, PathBuf::from("a.png"));
    }

    #[test]
    fn test_relative_to_is_structural() {
        // "/input" is not a component prefix of "/input2/x".
        let err = relative_to(Path::new("/input"), Path::new("/input2/x.png")).unwrap_err();
        assert!(matches!(err, WalkError::OutsideRoot { .. }));

        // Trailing separators do not matter.
        let rel = relative_to(Path::new("/in/"), Path::new("/in/x.png")).unwrap();
        assert_eq!(rel, PathBuf::from("x.png"));
    }

    #[test]
    fn test_mirror_path() {
        let out = mirror_path(Path::new("/out"), Path::new("/in"), Path::new("/in/sub/c.jpg"))
            .unwrap();
        assert_eq!(out, PathBuf::from("/out/sub/c.jpg"));
    }

    #[test]
    fn test_resolve_path_aliases() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        fs::create_dir(root.join("sub")).unwrap();

        assert_eq!(resolve_path(&root.join("sub/..")), Some(root.clone()));
        assert_eq!(resolve_path(&root.join("./sub")), Some(root.join("sub")));
    }

    #[test]
    fn test_resolve_path_missing_tail() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();

        assert_eq!(resolve_path(&root.join("new/deeper")), Some(root.join("new/deeper")));
        assert_eq!(resolve_path(&root.join("new/..")), Some(root.clone()));
        assert!(!root.join("new").exists());
    }
}
