// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Cross-cutting output that is not part of splitting itself:
//
//   report.rs - per-class counts for a run, plus an optional
//               JSON dump of the config and counts so a split
//               can be audited later.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Split summary and JSON report writer
pub mod report;
