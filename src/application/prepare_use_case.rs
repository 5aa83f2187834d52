// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full preparation pipeline in order:
//
//   Step 1: Load examples from sources  (Layer 4 - data)
//   Step 2: Balance class counts        (Layer 4 - data)
//   Step 3: Clean the text              (Layer 4 - data)
//   Step 4: One-hot encode labels       (Layer 4 - data)
//   Step 5: Build the dataset           (Layer 4 - data)
//   Step 6: Save manifest + report      (Layer 5 - infra)
//
// One configurable pipeline replaces what would otherwise be
// several near-duplicate loaders (single pair, polarity pair,
// multi-language combination): the source list covers any
// number of parallel file pairs, and the polarity mode covers
// positive/negative file splits.
//
// Balancing comes in two flavours:
//   - polarity mode uses the two-class balance() directly on
//     the raw positive/negative sides
//   - labelled pairs use balance_classes(), the N-class
//     generalisation (every class downsampled to the minimum)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::data::{
    balancer::{balance, balance_classes},
    dataset::TextDataset,
    encoder::one_hot,
    normalizer::Normalizer,
    reader::{LabeledFilePair, PolarityFilePair},
};
use crate::domain::example::Example;
use crate::domain::labels::ClassLabels;
use crate::domain::traits::ExampleSource;
use crate::infra::{
    manifest::ManifestStore,
    report::{DatasetReport, ReportWriter},
};

// ─── Preparation Configuration ────────────────────────────────────────────────
// Everything a preparation run depends on.
// Serialisable so it can be saved as the run manifest and
// reloaded later to rebuild the identical dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    /// Parallel text files, one example per line (paired with label_files)
    pub text_files:    Vec<String>,
    /// Parallel label files, one integer class index per line
    pub label_files:   Vec<String>,
    /// Positive-class file (polarity mode, class 1)
    pub positive_file: Option<String>,
    /// Negative-class file (polarity mode, class 0)
    pub negative_file: Option<String>,
    /// Downsample majority classes to the minority class count
    pub balance:       bool,
    /// Seed for the balancing sampler; None draws from entropy
    pub seed:          Option<u64>,
    /// Where the manifest and report are written
    pub out_dir:       String,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            text_files:    Vec::new(),
            label_files:   Vec::new(),
            positive_file: None,
            negative_file: None,
            balance:       false,
            seed:          None,
            out_dir:       "prepared".to_string(),
        }
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
// Owns the config and runs the full preparation pipeline.
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    /// Create a new PrepareUseCase with the given configuration
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline and persist the manifest + report.
    /// Returns the in-memory dataset for the caller to consume.
    pub fn execute(&self) -> Result<TextDataset> {
        let (dataset, report) = self.build_dataset()?;

        // ── Step 6: Save manifest and report ──────────────────────────────────
        // The manifest lets `preview --manifest` rebuild this exact
        // dataset; the report records the final class distribution.
        let manifest = ManifestStore::new(&self.config.out_dir);
        manifest.save_config(&self.config)?;
        ReportWriter::new(&self.config.out_dir)?.write(&report)?;

        Ok(dataset)
    }

    /// Run the pipeline without writing any files.
    /// This is the path the preview use case takes.
    pub fn build_dataset(&self) -> Result<(TextDataset, DatasetReport)> {
        let cfg = &self.config;
        self.check_input_modes()?;

        // ── Step 1 & 2: Load examples, balancing along the way ────────────────
        let mut per_source: Vec<(String, usize)> = Vec::new();

        let examples: Vec<Example> = if self.polarity_mode() && cfg.balance {
            // The two-class contract: balance the raw positive and
            // negative sides against each other, then label them.
            let pair = self.polarity_pair()?;
            let (positive, negative) = pair.load_split()?;
            per_source.push(("positive".to_string(), positive.len()));
            per_source.push(("negative".to_string(), negative.len()));

            let mut rng = rng_from(cfg.seed);
            let outcome = balance(positive, negative, &mut rng);

            let mut examples: Vec<Example> = outcome
                .positive
                .into_iter()
                .map(|t| Example::new(t, 1))
                .collect();
            examples.extend(outcome.negative.into_iter().map(|t| Example::new(t, 0)));
            examples
        } else {
            // Labelled pairs (or an unbalanced polarity pair), all
            // concatenated in the order the sources were given
            let mut examples = Vec::new();
            for source in self.resolve_sources()? {
                let loaded = source.load()?;
                per_source.push((source.name().to_string(), loaded.len()));
                examples.extend(loaded);
            }
            tracing::info!(
                "combined: {} examples from {} source(s)",
                examples.len(),
                per_source.len()
            );

            if cfg.balance {
                balance_examples(examples, cfg.seed)
            } else {
                examples
            }
        };

        // ── Step 3: Clean / normalise text ────────────────────────────────────
        let normalizer = Normalizer::new();
        let texts: Vec<String> = examples.iter().map(|e| normalizer.clean(&e.text)).collect();
        let labels = ClassLabels::new(examples.iter().map(|e| e.class).collect());

        // ── Step 4: One-hot encode labels ─────────────────────────────────────
        let encoded = one_hot(&labels)?;

        // ── Step 5: Build the dataset ─────────────────────────────────────────
        // The equal-length invariant is checked here once more —
        // after this point texts and labels cannot drift apart.
        let report = DatasetReport {
            per_source,
            class_counts: labels.class_counts(),
            total:        texts.len(),
            num_classes:  encoded.num_classes(),
        };
        let dataset = TextDataset::new(texts, encoded)?;

        tracing::info!(
            "prepared {} examples across {} classes",
            dataset.len(),
            dataset.num_classes()
        );
        Ok((dataset, report))
    }

    fn polarity_mode(&self) -> bool {
        self.config.positive_file.is_some() || self.config.negative_file.is_some()
    }

    /// Exactly one input mode must be used: either parallel
    /// text/label file pairs, or a positive/negative polarity pair.
    fn check_input_modes(&self) -> Result<()> {
        let cfg = &self.config;
        let has_pairs = !cfg.text_files.is_empty() || !cfg.label_files.is_empty();

        if has_pairs && self.polarity_mode() {
            bail!("give either --text/--labels pairs or --positive/--negative, not both");
        }
        if !has_pairs && !self.polarity_mode() {
            bail!("no input files — give --text/--labels pairs or --positive/--negative");
        }
        Ok(())
    }

    fn polarity_pair(&self) -> Result<PolarityFilePair> {
        let (Some(pos), Some(neg)) = (&self.config.positive_file, &self.config.negative_file)
        else {
            bail!("polarity mode needs both --positive and --negative");
        };
        Ok(PolarityFilePair::new(pos, neg))
    }

    /// Turn the config into a list of ExampleSource implementations.
    fn resolve_sources(&self) -> Result<Vec<Box<dyn ExampleSource>>> {
        let cfg = &self.config;

        if self.polarity_mode() {
            return Ok(vec![Box::new(self.polarity_pair()?)]);
        }

        if cfg.text_files.len() != cfg.label_files.len() {
            bail!(
                "need the same number of --text and --labels files (got {} and {})",
                cfg.text_files.len(),
                cfg.label_files.len()
            );
        }

        Ok(cfg
            .text_files
            .iter()
            .zip(&cfg.label_files)
            .map(|(x, y)| Box::new(LabeledFilePair::new(x, y)) as Box<dyn ExampleSource>)
            .collect())
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// N-class balancing: group examples by class, downsample every
/// group to the minimum class count, and re-concatenate group by
/// group in ascending class order. Callers are expected to shuffle
/// during batching anyway, so the grouped order is harmless.
fn balance_examples(examples: Vec<Example>, seed: Option<u64>) -> Vec<Example> {
    let classes = ClassLabels::new(examples.iter().map(|e| e.class).collect()).distinct();

    let groups: Vec<Vec<Example>> = classes
        .iter()
        .map(|&c| {
            examples
                .iter()
                .filter(|e| e.class == c)
                .cloned()
                .collect()
        })
        .collect();

    let mut rng = rng_from(seed);
    let (balanced, _report) = balance_classes(groups, &mut rng);

    balanced.into_iter().flatten().collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_pair(dir: &std::path::Path, stem: &str, texts: &str, labels: &str) -> (String, String) {
        let x = dir.join(format!("x-{stem}.txt"));
        let y = dir.join(format!("y-{stem}.txt"));
        fs::write(&x, texts).unwrap();
        fs::write(&y, labels).unwrap();
        (x.display().to_string(), y.display().to_string())
    }

    #[test]
    fn test_multi_source_combination() {
        let dir = tempfile::tempdir().unwrap();
        let (x_en, y_en) = write_pair(dir.path(), "en", "Good film!\nAwful.\n", "1\n0\n");
        let (x_fr, y_fr) = write_pair(dir.path(), "fr", "Superbe!\n", "1\n");

        let cfg = PrepareConfig {
            text_files:  vec![x_en, x_fr],
            label_files: vec![y_en, y_fr],
            out_dir:     dir.path().join("out").display().to_string(),
            ..Default::default()
        };
        let (dataset, report) = PrepareUseCase::new(cfg).build_dataset().unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.num_classes(), 2);
        // Sources concatenate in the order given, and text is cleaned
        assert_eq!(dataset.texts()[0], "good film !");
        assert_eq!(
            report.per_source,
            vec![("x-en".to_string(), 2), ("x-fr".to_string(), 1)]
        );
    }

    #[test]
    fn test_balanced_polarity_run() {
        let dir = tempfile::tempdir().unwrap();
        let pos = dir.path().join("pos.txt");
        let neg = dir.path().join("neg.txt");
        fs::write(&pos, "good\ngreat\nfine\nsolid\n").unwrap();
        fs::write(&neg, "bad\nawful\n").unwrap();

        let cfg = PrepareConfig {
            positive_file: Some(pos.display().to_string()),
            negative_file: Some(neg.display().to_string()),
            balance:       true,
            seed:          Some(42),
            out_dir:       dir.path().join("out").display().to_string(),
            ..Default::default()
        };
        let (dataset, report) = PrepareUseCase::new(cfg).build_dataset().unwrap();

        // 4 positives downsampled to the 2 negatives → 2 + 2
        assert_eq!(dataset.len(), 4);
        assert_eq!(report.class_counts, vec![(0, 2), (1, 2)]);
        // Positive rows are [0, 1], negative rows are [1, 0]
        let classes: Vec<_> = dataset.examples().iter().map(|e| e.class()).collect();
        assert_eq!(classes.iter().filter(|c| **c == Some(1)).count(), 2);
        assert_eq!(classes.iter().filter(|c| **c == Some(0)).count(), 2);
    }

    #[test]
    fn test_balanced_labelled_pairs_generalise_to_n_classes() {
        let dir = tempfile::tempdir().unwrap();
        let (x, y) = write_pair(
            dir.path(),
            "en",
            "a\nb\nc\nd\ne\nf\ng\n",
            "0\n0\n0\n1\n1\n2\n2\n",
        );

        let cfg = PrepareConfig {
            text_files:  vec![x],
            label_files: vec![y],
            balance:     true,
            seed:        Some(7),
            out_dir:     dir.path().join("out").display().to_string(),
            ..Default::default()
        };
        let (dataset, report) = PrepareUseCase::new(cfg).build_dataset().unwrap();

        // Minimum class count is 2 → every class reduced to 2
        assert_eq!(dataset.len(), 6);
        assert_eq!(report.class_counts, vec![(0, 2), (1, 2), (2, 2)]);
        assert_eq!(dataset.num_classes(), 3);
    }

    #[test]
    fn test_execute_writes_manifest_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let (x, y) = write_pair(dir.path(), "en", "one\ntwo\n", "0\n1\n");
        let out = dir.path().join("out");

        let cfg = PrepareConfig {
            text_files:  vec![x],
            label_files: vec![y],
            out_dir:     out.display().to_string(),
            ..Default::default()
        };
        PrepareUseCase::new(cfg).execute().unwrap();

        assert!(out.join("prepare_config.json").exists());
        assert!(out.join("report.csv").exists());
    }

    #[test]
    fn test_mixed_input_modes_rejected() {
        let cfg = PrepareConfig {
            text_files:    vec!["x.txt".into()],
            label_files:   vec!["y.txt".into()],
            positive_file: Some("pos.txt".into()),
            negative_file: Some("neg.txt".into()),
            ..Default::default()
        };
        assert!(PrepareUseCase::new(cfg).build_dataset().is_err());
    }

    #[test]
    fn test_unpaired_files_rejected() {
        let cfg = PrepareConfig {
            text_files:  vec!["x-en.txt".into(), "x-fr.txt".into()],
            label_files: vec!["y-en.txt".into()],
            ..Default::default()
        };
        assert!(PrepareUseCase::new(cfg).build_dataset().is_err());
    }

    #[test]
    fn test_no_inputs_rejected() {
        let cfg = PrepareConfig::default();
        assert!(PrepareUseCase::new(cfg).build_dataset().is_err());
    }
}
