use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Regular file emitted by a traversal.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct WalkEntry {
    pub(crate) path: PathBuf,
    pub(crate) relative_path: PathBuf,
    pub(crate) depth: usize,
}

impl WalkEntry {
    /// Returns the path in the form of the traversal root.
    ///
    /// A relative root yields relative paths, an absolute root absolute ones,
    /// and an empty root yields paths relative to the current directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path relative to the traversal root.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Returns the final path component.
    ///
    /// # Examples
    ///
    /// ```
    /// use walk::WalkBuilder;
    /// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
    /// let temp = tempfile::tempdir()?;
    /// std::fs::write(temp.path().join("notes.txt"), b"data")?;
    /// let mut walker = WalkBuilder::new(temp.path()).build()?;
    /// let entry = walker.next().expect("one file");
    /// assert_eq!(entry.file_name(), Some(std::ffi::OsStr::new("notes.txt")));
    /// # Ok(())
    /// # }
    /// # demo().unwrap();
    /// ```
    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        self.relative_path.file_name()
    }

    /// Reports how many directories separate the file from the root (a file
    /// directly inside the root has depth `1`).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Consumes the entry and returns its root-form path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
