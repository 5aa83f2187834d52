// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — loads, cleans, balances, and encodes a dataset
//   2. `preview` — builds the dataset and prints batch sizes
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PrepareArgs, PreviewArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "textprep",
    version = "0.1.0",
    about = "Load, clean, balance, and batch labelled text datasets for classifier training."
)]
pub struct Cli {
    /// The subcommand to run (prepare or preview)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    /// Destructuring consumes self so the args move out cleanly.
    pub fn run(self) -> Result<()> {
        let Self { command } = self;
        match command {
            Commands::Prepare(args) => Self::run_prepare(args),
            Commands::Preview(args) => Self::run_preview(args),
        }
    }

    /// Handles the `prepare` subcommand.
    /// Converts CLI args into a PrepareConfig and hands off to Layer 2.
    fn run_prepare(args: PrepareArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = PrepareUseCase::new(args.into());
        let dataset = use_case.execute()?;

        println!(
            "Prepared {} examples across {} classes.",
            dataset.len(),
            dataset.num_classes()
        );
        Ok(())
    }

    /// Handles the `preview` subcommand.
    /// Builds the dataset (from flags or a saved manifest) and
    /// prints the size of the first batches.
    fn run_preview(args: PreviewArgs) -> Result<()> {
        use crate::application::preview_use_case::{PreviewConfig, PreviewUseCase};
        use crate::infra::manifest::ManifestStore;

        // A saved manifest replaces the input flags entirely
        let prepare = match &args.manifest {
            Some(dir) => ManifestStore::new(dir).load_config()?,
            None => args.prepare.clone().into(),
        };

        let use_case = PreviewUseCase::new(PreviewConfig {
            prepare,
            batch_size: args.batch_size,
            num_epochs: args.epochs,
            shuffle:    !args.no_shuffle,
            limit:      args.limit,
        });

        for summary in use_case.execute()? {
            println!(
                "epoch {} batch {}: {} examples",
                summary.epoch, summary.batch, summary.size
            );
        }
        Ok(())
    }
}
