// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything that touches the image files themselves.
//
//   source/<class>/<file>
//       │
//       ▼
//   DirectoryLoader   → lists classes and their files
//       │
//       ▼
//   splitter          → sort, seeded shuffle, two-stage partition
//       │
//       ▼
//   DirectoryCopier   → copies into target/<split>/<class>/<file>
//
// Reference: Rust Book §12 (I/O), §13 (Iterators and Closures)

/// Reads class directories from the source root
pub mod loader;

/// Seeded shuffle and ratio partition
pub mod splitter;

/// Creates the destination layout and copies files
pub mod copier;
