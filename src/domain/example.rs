// ============================================================
// Layer 3 — Example Domain Types
// ============================================================
// Represents a single labelled text example.
// These are plain data structs with no behaviour —
// just text content and its class annotation.
//
// Two forms exist, one per pipeline stage:
//   - Example:        raw text + integer class index
//                     (what the readers produce)
//   - EncodedExample: cleaned text + one-hot label row
//                     (what the batch iterator hands to
//                      an external training loop)
//
// Using #[derive(Debug, Clone)] gives us:
//   - Debug: lets us print the struct with {:?}
//   - Clone: lets us make copies of the struct
//   - Serialize/Deserialize: lets us save/load as JSON
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

use serde::{Deserialize, Serialize};

/// A raw labelled example as read from disk.
/// By the time an Example is created the line has already
/// been trimmed, but NOT yet cleaned or encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    /// The raw text of the example (one input line)
    pub text: String,

    /// The integer class index, expected in [0, num_classes)
    pub class: usize,
}

impl Example {
    /// Create a new Example.
    /// Uses impl Into<String> so callers can pass &str or String —
    /// this is idiomatic Rust for flexible string arguments.
    pub fn new(text: impl Into<String>, class: usize) -> Self {
        Self {
            text:  text.into(),
            class,
        }
    }
}

/// A fully prepared example: cleaned text plus its one-hot label row.
///
/// This is the unit a training batch consists of. The label row
/// always has exactly one entry set to 1; its width equals the
/// number of distinct classes in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedExample {
    /// Cleaned, lowercased, punctuation-spaced text
    pub text: String,

    /// One-hot label row, e.g. [0, 1] for class 1 of 2
    pub label: Vec<u8>,
}

impl EncodedExample {
    pub fn new(text: impl Into<String>, label: Vec<u8>) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    /// Returns the class index encoded by the one-hot row
    pub fn class(&self) -> Option<usize> {
        self.label.iter().position(|&v| v == 1)
    }
}
