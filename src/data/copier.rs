// ============================================================
// Layer 4 - Destination Writers
// ============================================================
// Two FileSink implementations:
//
//   DirectoryCopier → creates target/{train,validation,test}/<class>
//                     and copies each assigned file into place
//   DryRunSink      → logs what would happen, touches nothing
//
// Output layout:
//
//   target/
//     train/th_10/img_004.png
//     validation/th_10/img_001.png
//     test/th_10/img_002.png
//
// Files are copied, never moved. Existing content under the
// target root is left alone; a file with the same name is
// overwritten. A failed copy aborts the run and whatever was
// already copied stays on disk.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    ffi::{OsStr, OsString},
    fs,
    path::PathBuf,
};

use crate::domain::class_dir::ClassDirectory;
use crate::domain::split::{Split, SplitAssignment};
use crate::domain::traits::FileSink;

/// Copies assigned files into the split layout under `root`.
pub struct DirectoryCopier {
    root: PathBuf,
}

impl DirectoryCopier {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// target/<split>/<class>
    fn class_dir(&self, split: Split, class: &OsStr) -> PathBuf {
        self.root.join(split.dir_name()).join(class)
    }
}

impl FileSink for DirectoryCopier {
    fn prepare(&self, classes: &[OsString]) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Cannot create target directory '{}'", self.root.display()))?;

        for split in Split::ALL {
            for class in classes {
                let dir = self.class_dir(split, class);
                fs::create_dir_all(&dir)
                    .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;
            }
        }

        tracing::debug!(
            "Created {} split directories under '{}'",
            classes.len() * Split::ALL.len(),
            self.root.display()
        );
        Ok(())
    }

    fn store(&self, class: &ClassDirectory, assignment: &SplitAssignment) -> Result<()> {
        for (split, file) in assignment.iter() {
            let from = class.path.join(file);
            let to   = self.class_dir(split, &class.name).join(file);

            fs::copy(&from, &to).with_context(|| {
                format!("Cannot copy '{}' to '{}'", from.display(), to.display())
            })?;

            tracing::debug!("Copied '{}' → {}", from.display(), split);
        }
        Ok(())
    }
}

/// Logs the planned layout and copies without writing anything.
pub struct DryRunSink;

impl FileSink for DryRunSink {
    fn prepare(&self, classes: &[OsString]) -> Result<()> {
        tracing::info!("Dry run: would create split directories for {} classes", classes.len());
        Ok(())
    }

    fn store(&self, class: &ClassDirectory, assignment: &SplitAssignment) -> Result<()> {
        for (split, file) in assignment.iter() {
            tracing::debug!(
                "Dry run: '{}' → {}",
                class.path.join(file).display(),
                split
            );
        }
        Ok(())
    }
}
