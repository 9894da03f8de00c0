// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments
// with clap, hands a SplitConfig to Layer 2, and prints the
// per-class summary it gets back.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use commands::{Commands, SplitArgs};

use crate::infra::report::ClassSummary;

#[derive(Parser, Debug)]
#[command(
    name = "image-split",
    version,
    about = "Split a class-per-directory image set into train, validation and test sets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args) => run_split(args),
        }
    }
}

/// Handles the `split` subcommand
fn run_split(args: SplitArgs) -> Result<()> {
    use crate::application::split_use_case::SplitUseCase;

    println!("Splitting '{}' into '{}'", args.source_dir, args.target_dir);

    // Each class is printed as soon as it is copied
    let source   = PathBuf::from(&args.source_dir);
    let use_case = SplitUseCase::new(args.into());
    let report   = use_case.execute_with(|c| println!("{}", summary_line(&source, c)))?;

    if report.config.dry_run {
        println!("Dry run: nothing was copied.");
    }
    Ok(())
}

/// One human-readable line for a finished class
fn summary_line(source: &Path, c: &ClassSummary) -> String {
    if c.empty {
        format!("No images found in {}", source.join(&c.class).display())
    } else {
        format!(
            "Class {}: {} train, {} val, {} test images",
            c.class, c.train, c.validation, c.test
        )
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::split_use_case::SplitConfig;

    #[test]
    fn test_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["image-split", "split"]).unwrap();
        let Commands::Split(args) = cli.command;
        assert_eq!(SplitConfig::from(args), SplitConfig::default());
    }

    #[test]
    fn test_flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "image-split", "split",
            "--source-dir", "raw",
            "--target-dir", "out",
            "--train-ratio", "0.8",
            "--val-ratio", "0.1",
            "--test-ratio", "0.1",
            "--seed", "7",
            "--dry-run",
            "--report", "out/report.json",
        ])
        .unwrap();
        let Commands::Split(args) = cli.command;
        let cfg = SplitConfig::from(args);

        assert_eq!(cfg.source_dir, "raw");
        assert_eq!(cfg.target_dir, "out");
        assert_eq!(cfg.train_ratio, 0.8);
        assert_eq!(cfg.seed, 7);
        assert!(cfg.dry_run);
        assert_eq!(cfg.report.as_deref(), Some("out/report.json"));
    }

    #[test]
    fn test_summary_line() {
        let source = Path::new("all_clash");
        let done   = ClassSummary {
            class:      "th_10".into(),
            train:      7,
            validation: 2,
            test:       2,
            empty:      false,
        };

        assert_eq!(
            summary_line(source, &done),
            "Class th_10: 7 train, 2 val, 2 test images"
        );

        let line = summary_line(source, &ClassSummary::empty("th_11"));
        assert!(line.starts_with("No images found in"));
        assert!(line.contains("th_11"));
    }
}
