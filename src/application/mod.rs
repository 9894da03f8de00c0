// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal:
// split a source tree into train / validation / test.
//
// Rules for this layer:
//   - No partition math here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The dataset split workflow
pub mod split_use_case;
