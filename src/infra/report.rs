// ============================================================
// Layer 5 — Dataset Report
// ============================================================
// Records what a preparation run produced, to a CSV file.
//
// Why log the class distribution to CSV?
//   - Easy to open in Excel or Google Sheets
//   - Shows at a glance whether balancing did its job
//   - Provides a permanent record of each preparation run
//
// Rows recorded, one per class:
//   - class:  the class index (0, 1, ...)
//   - count:  number of examples carrying that class
//
// Output file: <out_dir>/report.csv
//
// Example CSV output:
//   class,count
//   0,4855
//   1,4855
//
// This file is observability only — the dataset itself is
// never persisted, it lives in memory and is handed straight
// to the training collaborator.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, io::Write, path::PathBuf};

/// Summary of one preparation run.
#[derive(Debug, Clone)]
pub struct DatasetReport {
    /// (source name, example count) per input source
    pub per_source: Vec<(String, usize)>,
    /// (class index, example count) after balancing
    pub class_counts: Vec<(usize, usize)>,
    /// Total examples in the final dataset
    pub total: usize,
    /// Width of the one-hot rows
    pub num_classes: usize,
}

/// Writes the class distribution of a run to CSV.
pub struct ReportWriter {
    csv_path: PathBuf,
}

impl ReportWriter {
    /// Create a ReportWriter targeting <dir>/report.csv.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self {
            csv_path: dir.join("report.csv"),
        })
    }

    /// Write the report, overwriting any previous run's file.
    pub fn write(&self, report: &DatasetReport) -> Result<()> {
        let mut f = fs::File::create(&self.csv_path)
            .with_context(|| format!("Cannot write report to '{}'", self.csv_path.display()))?;

        // Header row, then one row per class
        writeln!(f, "class,count")?;
        for (class, count) in &report.class_counts {
            writeln!(f, "{},{}", class, count)?;
        }

        tracing::debug!(
            "Wrote report for {} examples / {} classes to '{}'",
            report.total,
            report.num_classes,
            self.csv_path.display()
        );
        Ok(())
    }

    /// Return the path to the report CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}
