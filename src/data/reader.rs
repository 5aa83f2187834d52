// ============================================================
// Layer 4 — File Readers (Example Sources)
// ============================================================
// Reads newline-delimited text and label files from disk and
// turns them into labelled examples.
//
// Two source shapes are supported:
//
//   LabeledFilePair — two parallel files:
//     x.txt   one raw example per line
//     y.txt   one integer class index per line
//     Line i of x.txt pairs with line i of y.txt, so the
//     two files MUST have the same number of lines.
//
//   PolarityFilePair — two files split by class:
//     pos.txt  every line is a positive example (class 1)
//     neg.txt  every line is a negative example (class 0)
//     No label file needed — the class is implied by which
//     file a line came from.
//
// Every line is trimmed of surrounding whitespace. Blank lines
// are kept as empty examples — they still pair positionally
// with a label line, so dropping them would desynchronise the
// two files.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::error::DataError;
use crate::domain::example::Example;
use crate::domain::traits::ExampleSource;

/// Read a file and return its lines, each trimmed.
/// Missing or unreadable files become DataError::Resource.
pub fn read_lines(path: &Path) -> Result<Vec<String>, DataError> {
    let content = fs::read_to_string(path).map_err(|e| DataError::resource(path, e))?;
    Ok(content.lines().map(|l| l.trim().to_string()).collect())
}

/// Parse one label file line into a class index.
/// Anything that isn't a non-negative integer is an InvalidArgument —
/// we fail fast rather than guessing what the caller meant.
fn parse_label(line: &str, path: &Path, line_no: usize) -> Result<usize, DataError> {
    line.parse::<usize>().map_err(|_| {
        DataError::InvalidArgument(format!(
            "label file '{}' line {}: '{}' is not a non-negative integer",
            path.display(),
            line_no + 1,
            line
        ))
    })
}

// ─── LabeledFilePair ──────────────────────────────────────────────────────────
/// A parallel (text file, label file) source.
pub struct LabeledFilePair {
    /// Short name used in progress messages (e.g. "x-en")
    name: String,
    /// Path to the text file, one example per line
    text_path: PathBuf,
    /// Path to the label file, one integer per line
    label_path: PathBuf,
}

impl LabeledFilePair {
    /// Create a source from a text path and a label path.
    /// The progress name is derived from the text file's stem.
    pub fn new(text_path: impl Into<PathBuf>, label_path: impl Into<PathBuf>) -> Self {
        let text_path = text_path.into();
        let name = text_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("source")
            .to_string();
        Self {
            name,
            text_path,
            label_path: label_path.into(),
        }
    }
}

impl ExampleSource for LabeledFilePair {
    fn load(&self) -> Result<Vec<Example>, DataError> {
        let texts = read_lines(&self.text_path)?;
        let label_lines = read_lines(&self.label_path)?;

        // The two files are positionally paired — a count mismatch
        // means they don't describe the same dataset. Fatal.
        if texts.len() != label_lines.len() {
            return Err(DataError::PreconditionViolation(format!(
                "'{}' has {} lines but '{}' has {} — parallel files must match",
                self.text_path.display(),
                texts.len(),
                self.label_path.display(),
                label_lines.len()
            )));
        }

        let mut examples = Vec::with_capacity(texts.len());
        for (i, (text, line)) in texts.into_iter().zip(&label_lines).enumerate() {
            let class = parse_label(line, &self.label_path, i)?;
            examples.push(Example::new(text, class));
        }

        tracing::info!("{}: {} examples", self.name, examples.len());
        Ok(examples)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ─── PolarityFilePair ─────────────────────────────────────────────────────────
/// A positive/negative file source for binary sentiment data.
/// Positive lines get class 1, negative lines class 0 — matching
/// the conventional [0,1] / [1,0] one-hot rows downstream.
pub struct PolarityFilePair {
    name: String,
    positive_path: PathBuf,
    negative_path: PathBuf,
}

impl PolarityFilePair {
    pub fn new(positive_path: impl Into<PathBuf>, negative_path: impl Into<PathBuf>) -> Self {
        Self {
            name: "polarity".to_string(),
            positive_path: positive_path.into(),
            negative_path: negative_path.into(),
        }
    }

    /// Load the two sides separately, raw texts only.
    /// The prepare pipeline uses this when it wants to balance
    /// the two classes before labelling them.
    pub fn load_split(&self) -> Result<(Vec<String>, Vec<String>), DataError> {
        let positive = read_lines(&self.positive_path)?;
        let negative = read_lines(&self.negative_path)?;
        tracing::info!(
            "{}: {} positive, {} negative examples",
            self.name,
            positive.len(),
            negative.len()
        );
        Ok((positive, negative))
    }
}

impl ExampleSource for PolarityFilePair {
    fn load(&self) -> Result<Vec<Example>, DataError> {
        let (positive, negative) = self.load_split()?;

        // Positive examples first (class 1), then negative (class 0)
        let mut examples: Vec<Example> = positive
            .into_iter()
            .map(|t| Example::new(t, 1))
            .collect();
        examples.extend(negative.into_iter().map(|t| Example::new(t, 0)));
        Ok(examples)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
