// ============================================================
// Layer 4 - Class Directory Loader
// ============================================================
// Reads the source tree:
//
//   source/
//     th_10/   ← class
//       img_001.png
//       img_002.png
//     th_11/   ← class
//       ...
//     notes.txt ← not a directory, ignored
//
// Only directories directly under the root are classes, and
// only regular files directly inside a class are samples.
// Nested directories inside a class are not descended into.
//
// Symlinks are followed when deciding "directory" vs "file".
// Names stay OsString end to end, so non UTF-8 names are
// split like any other file.
//
// Reference: Rust Book §9 (Error Handling)
//            std::fs::read_dir documentation

use anyhow::{Context, Result};
use std::{
    ffi::{OsStr, OsString},
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::domain::class_dir::ClassDirectory;
use crate::domain::error::SplitError;
use crate::domain::traits::ClassSource;

/// Loads class directories from a source root on disk.
/// Implements the ClassSource trait from Layer 3.
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    /// Create a new DirectoryLoader pointed at a source root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Check that the root exists and is a directory
    fn check_root(&self) -> Result<()> {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(SplitError::SourceNotDirectory(self.root.clone()).into()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SplitError::SourceNotFound(self.root.clone()).into())
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Cannot access '{}'", self.root.display()))),
        }
    }
}

impl ClassSource for DirectoryLoader {
    fn class_names(&self) -> Result<Vec<OsString>> {
        self.check_root()?;

        let mut names = Vec::new();
        for (name, path) in list_entries(&self.root)? {
            if is_dir(&path)? {
                names.push(name);
            } else {
                tracing::debug!("Ignoring non-directory entry '{}'", path.display());
            }
        }

        // Byte order, so the shared RNG visits classes in the
        // same order on every platform
        names.sort();
        tracing::info!("Found {} classes in '{}'", names.len(), self.root.display());
        Ok(names)
    }

    fn load_class(&self, name: &OsStr) -> Result<ClassDirectory> {
        let path = self.root.join(name);

        let mut files = Vec::new();
        for (file_name, file_path) in list_entries(&path)? {
            if is_file(&file_path)? {
                files.push(file_name);
            }
        }

        tracing::debug!("Class '{}': {} files", name.to_string_lossy(), files.len());
        Ok(ClassDirectory::new(name, path, files))
    }
}

/// List (name, path) for every entry in `dir`.
fn list_entries(dir: &Path) -> Result<Vec<(OsString, PathBuf)>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory '{}'", dir.display()))?
    {
        let entry = entry
            .with_context(|| format!("Cannot read entry in '{}'", dir.display()))?;
        entries.push((entry.file_name(), entry.path()));
    }

    Ok(entries)
}

fn is_dir(path: &Path) -> Result<bool> {
    Ok(metadata(path)?.is_some_and(|m| m.is_dir()))
}

fn is_file(path: &Path) -> Result<bool> {
    Ok(metadata(path)?.is_some_and(|m| m.is_file()))
}

/// Follow symlinks; a dangling link reads as "neither file nor directory"
fn metadata(path: &Path) -> Result<Option<fs::Metadata>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Cannot stat '{}'", path.display())),
    }
}
