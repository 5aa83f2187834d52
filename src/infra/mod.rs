// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Handles all cross-cutting concerns that don't belong in
// any specific business layer:
//
//   manifest.rs — Run configuration persistence
//                 Saves the PrepareConfig as JSON so a later
//                 `preview --manifest` run rebuilds the exact
//                 same dataset (same files, seed, balancing).
//
//   report.rs   — Dataset report
//                 Writes the per-class example counts of a
//                 preparation run to a CSV file for later
//                 inspection.
//
// Why is this a separate layer?
//   These concerns are used by multiple use cases but don't
//   belong to any one of them. Keeping them here:
//   - Prevents duplication across layers
//   - Makes it easy to swap implementations
//     (e.g. swap local files for object storage)
//   - Keeps other layers focused on their core logic
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Prepare-config saving and loading
pub mod manifest;

/// Class-distribution CSV report
pub mod report;
