// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO file I/O here
//   - NO regex or randomness here
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no filesystem needed)
//   - Easy to understand (no pipeline noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A labelled text example, raw and encoded forms
pub mod example;

// Typed containers for integer labels and one-hot matrices
pub mod labels;

// Core abstractions (traits) that other layers implement
pub mod traits;
