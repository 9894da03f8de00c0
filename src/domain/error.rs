// ============================================================
// Layer 3 - Domain Errors
// ============================================================
// Errors the splitter can detect on its own, before or while
// reading the source tree. Filesystem failures that happen
// mid-run are carried as anyhow errors with context instead.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)
//            thiserror crate documentation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating a split request.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The three ratios do not add up to 1 within tolerance.
    #[error(
        "Ratios must sum to 1 (train {train} + validation {validation} + test {test} = {sum})"
    )]
    InvalidRatios {
        train:      f64,
        validation: f64,
        test:       f64,
        sum:        f64,
    },

    /// A single ratio is negative, NaN or infinite.
    #[error("{name} ratio must be a finite, non-negative number (got {value})")]
    RatioOutOfRange {
        name:  &'static str,
        value: f64,
    },

    /// The source root does not exist.
    #[error("Source directory '{}' does not exist", .0.display())]
    SourceNotFound(PathBuf),

    /// The source root exists but is a file.
    #[error("Source path '{}' is not a directory", .0.display())]
    SourceNotDirectory(PathBuf),
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ratios_message_shows_sum() {
        let err = SplitError::InvalidRatios {
            train:      0.5,
            validation: 0.3,
            test:       0.3,
            sum:        1.1,
        };
        let msg = err.to_string();
        assert!(msg.contains("must sum to 1"));
        assert!(msg.contains("1.1"));
    }

    #[test]
    fn test_source_errors_show_path() {
        let err = SplitError::SourceNotFound(PathBuf::from("all_clash"));
        assert!(err.to_string().contains("all_clash"));

        let err = SplitError::SourceNotDirectory(PathBuf::from("notes.txt"));
        assert!(err.to_string().contains("notes.txt"));
    }
}
