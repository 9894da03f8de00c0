// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Pure Rust types that describe a dataset split:
// which classes exist, which files belong to them, and
// which split each file ends up in.
//
// Rules for this layer:
//   - NO file I/O
//   - NO printing or logging setup
//   - Only plain structs, enums, traits and validation
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// A class label and the file names it contains
pub mod class_dir;

// Split names, ratios and the per-class assignment
pub mod split;

// Typed errors for invalid input
pub mod error;

// Seams implemented by the data layer
pub mod traits;
