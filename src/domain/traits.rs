// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - LabeledFilePair  implements ExampleSource
//   - PolarityFilePair implements ExampleSource
//   - A future CsvSource could also implement ExampleSource
//   - The application layer only sees ExampleSource
//     and works with all of them without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use crate::data::error::DataError;
use crate::domain::example::Example;

// ─── ExampleSource ────────────────────────────────────────────────────────────
/// Any component that can load a labelled example collection.
///
/// Implementations must verify their own structural preconditions
/// (e.g. parallel files with equal line counts) and surface a
/// DataError before returning — by the time examples exist, every
/// text is paired with a class.
///
/// Implementations:
///   - LabeledFilePair  → parallel text file + integer label file
///   - PolarityFilePair → positive file (class 1) + negative file (class 0)
pub trait ExampleSource {
    /// Load all examples from this source, line-trimmed but
    /// not yet cleaned.
    fn load(&self) -> Result<Vec<Example>, DataError>;

    /// A short name for progress messages (e.g. the file stem)
    fn name(&self) -> &str;
}
