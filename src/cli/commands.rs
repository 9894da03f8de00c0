// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the `split` subcommand and its flags.
// Defaults reproduce the classic invocation:
//
//   image-split split
//     == split all_clash into split_clash, 0.7 / 0.15 / 0.15, seed 42
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::split_use_case::SplitConfig;

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy a class-per-directory image set into train/validation/test
    Split(SplitArgs),
}

/// All arguments for the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Source directory with one subdirectory per class
    #[arg(long, default_value = "all_clash")]
    pub source_dir: String,

    /// Destination root; train/, validation/ and test/ are created inside
    #[arg(long, default_value = "split_clash")]
    pub target_dir: String,

    /// Fraction of each class copied to train/
    #[arg(long, default_value_t = 0.7)]
    pub train_ratio: f64,

    /// Fraction of each class copied to validation/
    #[arg(long, default_value_t = 0.15)]
    pub val_ratio: f64,

    /// Fraction of each class copied to test/
    #[arg(long, default_value_t = 0.15)]
    pub test_ratio: f64,

    /// Seed for shuffling and partitioning
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Compute and print the split without creating or copying anything
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON summary of the run to this path
    #[arg(long)]
    pub report: Option<String>,
}

/// Boundary between Layer 1 and Layer 2:
/// the application layer never sees clap types.
impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            source_dir:  a.source_dir,
            target_dir:  a.target_dir,
            train_ratio: a.train_ratio,
            val_ratio:   a.val_ratio,
            test_ratio:  a.test_ratio,
            seed:        a.seed,
            dry_run:     a.dry_run,
            report:      a.report,
        }
    }
}
