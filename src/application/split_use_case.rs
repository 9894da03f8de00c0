// ============================================================
// Layer 2 - SplitUseCase
// ============================================================
// Runs the split pipeline in order:
//
//   Step 1: Validate ratios              (Layer 3 - domain)
//   Step 2: Enumerate classes            (Layer 4 - data)
//   Step 3: Create destination layout    (Layer 4 - data)
//   Step 4: Per class, in name order:
//             list files → assign → copy (Layer 4 - data)
//             → hand the summary to the caller
//   Step 5: Save JSON report, if asked   (Layer 6 - infra)
//
// Step 1 runs before any filesystem access. A failure in any
// later step aborts the run; nothing already written is
// rolled back.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{
    copier::{DirectoryCopier, DryRunSink},
    loader::DirectoryLoader,
    splitter::{assign, seeded_rng},
};
use crate::domain::split::SplitRatios;
use crate::domain::traits::{ClassSource, FileSink};
use crate::infra::report::{ClassSummary, SplitReport};

// ─── Split Configuration ─────────────────────────────────────────────────────
// Everything a run needs. Serialisable so it can be embedded
// in the JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub source_dir:  String,
    pub target_dir:  String,
    pub train_ratio: f64,
    pub val_ratio:   f64,
    pub test_ratio:  f64,
    pub seed:        u64,
    pub dry_run:     bool,
    pub report:      Option<String>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        let ratios = SplitRatios::default();
        Self {
            source_dir:  "all_clash".to_string(),
            target_dir:  "split_clash".to_string(),
            train_ratio: ratios.train(),
            val_ratio:   ratios.validation(),
            test_ratio:  ratios.test(),
            seed:        42,
            dry_run:     false,
            report:      None,
        }
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Execute the split end to end and return what happened.
    pub fn execute(&self) -> Result<SplitReport> {
        self.execute_with(|_| {})
    }

    /// Same as `execute`, calling `on_class` as soon as each class
    /// is done. Classes finished before a failure have already
    /// been reported when the error comes back.
    pub fn execute_with<F>(&self, mut on_class: F) -> Result<SplitReport>
    where
        F: FnMut(&ClassSummary),
    {
        let cfg = &self.config;

        // ── Step 1: Validate ratios ───────────────────────────────────────────
        let ratios = SplitRatios::new(cfg.train_ratio, cfg.val_ratio, cfg.test_ratio)?;

        // ── Steps 2-4: Enumerate, lay out, split and copy ─────────────────────
        let source = DirectoryLoader::new(&cfg.source_dir);
        let report = if cfg.dry_run {
            self.run(&source, &DryRunSink, &ratios, &mut on_class)?
        } else {
            let sink = DirectoryCopier::new(&cfg.target_dir);
            self.run(&source, &sink, &ratios, &mut on_class)?
        };

        tracing::info!(
            "Split {} files across {} classes (seed {})",
            report.total_files(),
            report.classes.len(),
            cfg.seed,
        );

        // ── Step 5: Save report ───────────────────────────────────────────────
        if let Some(path) = &cfg.report {
            report.save(Path::new(path))?;
        }

        Ok(report)
    }

    /// Drive one split through any source and sink.
    /// The RNG is created here and consumed in class order.
    fn run(
        &self,
        source:   &dyn ClassSource,
        sink:     &dyn FileSink,
        ratios:   &SplitRatios,
        on_class: &mut dyn FnMut(&ClassSummary),
    ) -> Result<SplitReport> {
        let classes = source.class_names()?;
        sink.prepare(&classes)?;

        let mut rng    = seeded_rng(self.config.seed);
        let mut report = SplitReport::new(self.config.clone());

        for name in &classes {
            let class = source.load_class(name)?;

            let summary = if class.is_empty() {
                tracing::warn!("No images found in '{}'", class.path.display());
                ClassSummary::empty(class.label())
            } else {
                let assignment = assign(&class.files, ratios, &mut rng);
                sink.store(&class, &assignment)?;

                let summary = ClassSummary::from_assignment(class.label(), &assignment);
                tracing::info!(
                    "Class {}: {} train, {} val, {} test",
                    summary.class,
                    summary.train,
                    summary.validation,
                    summary.test,
                );
                summary
            };

            on_class(&summary);
            report.classes.push(summary);
        }

        Ok(report)
    }
}
