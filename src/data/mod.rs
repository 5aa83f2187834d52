// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw text files on disk
// all the way to shuffled training batches.
//
// The pipeline flows in this order:
//
//   x.txt / y.txt  (or pos.txt / neg.txt)
//       │
//       ▼
//   reader            → reads line files, pairs text with labels
//       │
//       ▼
//   normalizer        → cleans text (punctuation, case, whitespace)
//       │
//       ▼
//   balancer          → downsamples majority classes
//       │
//       ▼
//   encoder           → integer labels → one-hot matrix
//       │
//       ▼
//   dataset           → pairs texts with label rows, checks lengths
//       │
//       ▼
//   batcher           → yields shuffled mini-batches per epoch
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §13 (Iterators and Closures)

/// Typed errors for every failure the pipeline can surface
pub mod error;

/// Reads newline-delimited text and label files
pub mod reader;

/// Cleans and normalises raw example text
pub mod normalizer;

/// Downsamples majority classes to balance the dataset
pub mod balancer;

/// Encodes integer labels as one-hot vectors
pub mod encoder;

/// The prepared (texts, one-hot labels) dataset
pub mod dataset;

/// Lazy epoch/batch iteration with optional shuffling
pub mod batcher;
