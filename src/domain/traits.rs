// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer drives a split through two seams:
//
//   ClassSource → where class directories come from
//                 (DirectoryLoader reads the source tree)
//   FileSink    → where assigned files go
//                 (DirectoryCopier copies, DryRunSink only logs)
//
// SplitUseCase only sees these traits, so a dry run and a
// real run share exactly the same control flow and RNG usage.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::ffi::{OsStr, OsString};
use crate::domain::class_dir::ClassDirectory;
use crate::domain::split::SplitAssignment;

// ─── ClassSource ──────────────────────────────────────────────────────────────
/// Anything that can enumerate classes and list their files.
pub trait ClassSource {
    /// Names of every class, in the order they will be processed.
    fn class_names(&self) -> Result<Vec<OsString>>;

    /// Read the file list of one class.
    /// Called once per class, right before that class is split.
    fn load_class(&self, name: &OsStr) -> Result<ClassDirectory>;
}

// ─── FileSink ─────────────────────────────────────────────────────────────────
/// Anything that can receive the files of a finished assignment.
pub trait FileSink {
    /// Create the destination layout for every class up front.
    fn prepare(&self, classes: &[OsString]) -> Result<()>;

    /// Deliver every file of `class` to the split it was assigned to.
    fn store(&self, class: &ClassDirectory, assignment: &SplitAssignment) -> Result<()>;
}
