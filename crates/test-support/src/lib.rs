#![deny(unsafe_code)]

//! Shared fixtures for traversal tests.
//!
//! [`TreeFixture`] lays out a directory tree inside a temporary directory from
//! a compact list of relative paths. Paths ending in `/` become directories,
//! everything else becomes a small regular file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory populated with a described tree.
#[derive(Debug)]
pub struct TreeFixture {
    temp: TempDir,
    root: PathBuf,
}

impl TreeFixture {
    /// Creates a fixture whose root directory is `<tmp>/root`.
    pub fn new(layout: &[&str]) -> io::Result<Self> {
        let temp = tempfile::tempdir()?;
        let root = temp.path().join("root");
        fs::create_dir(&root)?;
        let fixture = Self { temp, root };
        fixture.add(layout)?;
        Ok(fixture)
    }

    /// Adds more entries below the root.
    pub fn add(&self, layout: &[&str]) -> io::Result<()> {
        for entry in layout {
            let path = self.root.join(entry.trim_end_matches('/'));
            if entry.ends_with('/') {
                fs::create_dir_all(&path)?;
            } else {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, entry.as_bytes())?;
            }
        }
        Ok(())
    }

    /// Returns the tree root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the temporary directory containing the root, useful for
    /// creating symlink targets outside the tree.
    #[must_use]
    pub fn outside(&self) -> &Path {
        self.temp.path()
    }

    /// Joins `relative` onto the root.
    #[must_use]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Creates a symbolic link at `link` (relative to the root) pointing at
    /// `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: impl AsRef<Path>, link: &str) -> io::Result<()> {
        std::os::unix::fs::symlink(target, self.root.join(link))
    }
}

/// Removes all permissions from a directory until dropped.
#[cfg(unix)]
#[derive(Debug)]
pub struct PermissionGuard {
    path: PathBuf,
    original: fs::Permissions,
}

#[cfg(unix)]
impl Drop for PermissionGuard {
    fn drop(&mut self) {
        let _ = fs::set_permissions(&self.path, self.original.clone());
    }
}

/// Makes `dir` unreadable.
///
/// Returns `None` when the directory is still listable afterwards (for
/// example when tests run as root), in which case permission-based tests
/// should return early.
#[cfg(unix)]
pub fn deny_access(dir: &Path) -> io::Result<Option<PermissionGuard>> {
    use std::os::unix::fs::PermissionsExt;

    let original = fs::metadata(dir)?.permissions();
    fs::set_permissions(dir, fs::Permissions::from_mode(0o000))?;
    let guard = PermissionGuard {
        path: dir.to_path_buf(),
        original,
    };

    if fs::read_dir(dir).is_ok() {
        return Ok(None);
    }
    Ok(Some(guard))
}

/// Converts paths to `/`-separated strings for order-sensitive assertions.
#[must_use]
pub fn to_strings<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Vec<String> {
    paths
        .into_iter()
        .map(|path| path.as_ref().to_string_lossy().replace('\\', "/"))
        .collect()
}

/// Like [`to_strings`] but sorted, for assertions that ignore enumeration
/// order.
#[must_use]
pub fn sorted_strings<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Vec<String> {
    let mut strings = to_strings(paths);
    strings.sort();
    strings
}
