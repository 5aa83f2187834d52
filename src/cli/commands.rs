// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `preview`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, u64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::prepare_use_case::PrepareConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load, clean, balance, and encode a labelled text dataset
    Prepare(PrepareArgs),

    /// Build the dataset and print the first few batch sizes
    Preview(PreviewArgs),
}

/// All arguments for the `prepare` command.
/// Each field becomes a --flag on the command line.
///
/// Input modes (pick one):
///   --text x-en.txt --labels y-en.txt [--text x-fr.txt --labels y-fr.txt ...]
///   --positive pos.txt --negative neg.txt
#[derive(Args, Debug, Clone)]
pub struct PrepareArgs {
    /// Text file with one example per line (repeat per source)
    #[arg(long)]
    pub text: Vec<String>,

    /// Label file with one integer class index per line
    /// (repeat, paired positionally with --text)
    #[arg(long)]
    pub labels: Vec<String>,

    /// Positive-class example file (class 1)
    #[arg(long)]
    pub positive: Option<String>,

    /// Negative-class example file (class 0)
    #[arg(long)]
    pub negative: Option<String>,

    /// Downsample majority classes so class counts match exactly
    #[arg(long)]
    pub balance: bool,

    /// Seed for sampling and shuffling — same seed, same dataset
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for the run manifest and class report
    #[arg(long, default_value = "prepared")]
    pub out_dir: String,
}

/// Convert CLI PrepareArgs into the application-layer PrepareConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            text_files:    a.text,
            label_files:   a.labels,
            positive_file: a.positive,
            negative_file: a.negative,
            balance:       a.balance,
            seed:          a.seed,
            out_dir:       a.out_dir,
        }
    }
}

/// All arguments for the `preview` command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Reuse the prepare config saved in this directory
    /// instead of repeating the input flags
    #[arg(long, conflicts_with_all = ["text", "labels", "positive", "negative"])]
    pub manifest: Option<String>,

    /// Same input flags as `prepare`
    #[command(flatten)]
    pub prepare: PrepareArgs,

    /// Number of examples per batch
    #[arg(long, default_value_t = 64)]
    pub batch_size: usize,

    /// Number of full passes over the dataset
    #[arg(long, default_value_t = 1)]
    pub epochs: usize,

    /// Iterate in original order instead of reshuffling per epoch
    #[arg(long)]
    pub no_shuffle: bool,

    /// How many batches to print before stopping
    #[arg(long, default_value_t = 8)]
    pub limit: usize,
}
