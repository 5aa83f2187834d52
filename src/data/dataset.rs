use crate::data::error::DataError;
use crate::domain::example::EncodedExample;
use crate::domain::labels::OneHotMatrix;

/// A prepared dataset: cleaned texts positionally paired with
/// one-hot label rows. The two sequences always have equal
/// length — that invariant is checked once, at construction,
/// and the dataset is immutable afterwards.
#[derive(Debug)]
pub struct TextDataset {
    texts:  Vec<String>,
    labels: OneHotMatrix,
}

impl TextDataset {
    /// Pair texts with their encoded labels.
    /// A length mismatch is a fatal precondition failure.
    pub fn new(texts: Vec<String>, labels: OneHotMatrix) -> Result<Self, DataError> {
        if texts.len() != labels.len() {
            return Err(DataError::PreconditionViolation(format!(
                "{} texts but {} label rows — sequences must pair positionally",
                texts.len(),
                labels.len()
            )));
        }
        Ok(Self { texts, labels })
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn num_classes(&self) -> usize {
        self.labels.num_classes()
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// The (text, label) pair at `index`, cloned out
    pub fn get(&self, index: usize) -> Option<EncodedExample> {
        let text = self.texts.get(index)?;
        let row = self.labels.row(index)?;
        Some(EncodedExample::new(text.clone(), row.to_vec()))
    }

    /// Clone the whole dataset into (text, label) pairs — the form
    /// the batch iterator consumes. The dataset itself stays
    /// untouched, so it can be iterated again with fresh parameters.
    pub fn examples(&self) -> Vec<EncodedExample> {
        (0..self.len()).filter_map(|i| self.get(i)).collect()
    }
}
