// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (preparing a dataset or previewing batches).
//
// Rules for this layer:
//   - No regex or sampling math here
//   - No UI or printing here (that's Layer 1)
//   - No direct file parsing (that's Layer 4 and 5)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The dataset preparation workflow
pub mod prepare_use_case;

// The batch preview workflow
pub mod preview_use_case;
