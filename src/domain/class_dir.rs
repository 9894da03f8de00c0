// ============================================================
// Layer 3 - ClassDirectory Domain Type
// ============================================================
// One subdirectory of the source root. Its name is the class
// label; its files are the regular files found directly
// inside it (no recursion).
//
// Names are kept as OsString so files whose names are not
// valid UTF-8 are still split and copied.

use std::{ffi::OsString, path::PathBuf};

/// A class label with the files that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDirectory {
    /// The class label (the subdirectory name)
    pub name: OsString,

    /// Full path to the subdirectory in the source tree
    pub path: PathBuf,

    /// Plain file names, sorted by their raw bytes
    pub files: Vec<OsString>,
}

impl ClassDirectory {
    /// Create a ClassDirectory. The file list is sorted so that
    /// the order never depends on how the OS lists a directory.
    pub fn new(name: impl Into<OsString>, path: impl Into<PathBuf>, mut files: Vec<OsString>) -> Self {
        files.sort();
        Self {
            name:  name.into(),
            path:  path.into(),
            files,
        }
    }

    /// Class label for logs and reports
    pub fn label(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    /// True when the class has no files to split
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
