// ============================================================
// Layer 4 — Data Error Taxonomy
// ============================================================
// All failures the data layer can surface, as a typed enum.
//
// Three kinds exist:
//   - PreconditionViolation: the inputs contradict each other
//     (e.g. a text file and its label file have different
//     line counts). The load is aborted.
//   - InvalidArgument: a caller-supplied value is unusable
//     (zero batch size, a label that isn't an integer or is
//     outside the observed class range).
//   - Resource: a file couldn't be read. The underlying
//     io::Error is preserved as the error source.
//
// None of these are retried — this is a one-shot data
// preparation step, not a resilient service. The application
// layer wraps these in anyhow::Context for user-facing
// messages; the data layer itself stays typed so tests can
// match on the exact failure kind.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every error the data layer can produce.
#[derive(Debug, Error)]
pub enum DataError {
    /// Inputs violate a structural precondition, e.g. parallel
    /// files with mismatched line counts. Fatal.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// A caller-supplied argument is invalid, e.g. batch_size = 0
    /// or a label value outside the observed class range. Fatal.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An input file is missing or unreadable. Propagated to the
    /// caller unmodified — no retry.
    #[error("cannot read '{path}'")]
    Resource {
        /// The file we failed to read
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: io::Error,
    },
}

impl DataError {
    /// Shorthand for wrapping an io::Error with the offending path
    pub fn resource(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Resource {
            path: path.into(),
            source,
        }
    }
}
