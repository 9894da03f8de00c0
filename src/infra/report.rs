// ============================================================
// Layer 6 - Split Report
// ============================================================
// Records what a run did, class by class, and optionally
// writes it to disk as JSON next to (or away from) the data.
//
// Example output (--report split_clash/report.json):
//   {
//     "config": { "source_dir": "all_clash", ..., "seed": 42 },
//     "classes": [
//       { "class": "th_10", "train": 70, "validation": 15, "test": 15, "empty": false },
//       { "class": "th_11", "train": 0,  "validation": 0,  "test": 0,  "empty": true }
//     ]
//   }
//
// Reference: serde_json documentation
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::application::split_use_case::SplitConfig;
use crate::domain::split::SplitAssignment;

/// Per-class file counts for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Class label; non UTF-8 bytes are shown as U+FFFD
    pub class:      String,
    pub train:      usize,
    pub validation: usize,
    pub test:       usize,

    /// True when the class directory had no files
    pub empty: bool,
}

impl ClassSummary {
    /// Summary for a class that was split
    pub fn from_assignment(class: impl Into<String>, a: &SplitAssignment) -> Self {
        Self {
            class:      class.into(),
            train:      a.train.len(),
            validation: a.validation.len(),
            test:       a.test.len(),
            empty:      false,
        }
    }

    /// Summary for a class that had nothing to split
    pub fn empty(class: impl Into<String>) -> Self {
        Self {
            class:      class.into(),
            train:      0,
            validation: 0,
            test:       0,
            empty:      true,
        }
    }

    pub fn total(&self) -> usize {
        self.train + self.validation + self.test
    }
}

/// Everything a run decided: the config it ran with and the
/// resulting per-class counts, in processing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    pub config:  SplitConfig,
    pub classes: Vec<ClassSummary>,
}

impl SplitReport {
    pub fn new(config: SplitConfig) -> Self {
        Self { config, classes: Vec::new() }
    }

    /// Number of files assigned across every class
    pub fn total_files(&self) -> usize {
        self.classes.iter().map(ClassSummary::total).sum()
    }

    /// Write the report as pretty JSON, creating parent
    /// directories if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

        tracing::info!("Saved split report to '{}'", path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_summary_counts() {
        let a = SplitAssignment {
            train:      vec!["a".into(), "b".into()],
            validation: vec!["c".into()],
            test:       vec![],
        };
        let s = ClassSummary::from_assignment("th_10", &a);
        assert_eq!((s.train, s.validation, s.test), (2, 1, 0));
        assert_eq!(s.total(), 3);
        assert!(!s.empty);

        let e = ClassSummary::empty("th_11");
        assert!(e.empty);
        assert_eq!(e.total(), 0);
    }

    #[test]
    fn test_save_writes_readable_json() {
        let tmp  = TempDir::new().unwrap();
        let path = tmp.path().join("reports").join("split.json");

        let mut report = SplitReport::new(SplitConfig::default());
        report.classes.push(ClassSummary::empty("th_11"));
        report.save(&path).unwrap();

        let loaded: SplitReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.config.seed, 42);
        assert_eq!(loaded.classes, report.classes);
        assert_eq!(loaded.total_files(), 0);
    }
}
