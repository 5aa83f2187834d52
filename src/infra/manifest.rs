// ============================================================
// Layer 5 — Run Manifest
// ============================================================
// Saves and restores the preparation configuration as JSON.
//
// Why save the config?
//   A prepared dataset is only reproducible if we know exactly
//   which files, seed, and balance flag produced it. Writing
//   the config next to the report means a later `preview` run
//   can rebuild the identical dataset with --manifest instead
//   of repeating every flag.
//
// File naming convention:
//   <out_dir>/
//     prepare_config.json   ← the full PrepareConfig
//     report.csv            ← class distribution (report.rs)
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json crate documentation

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::prepare_use_case::PrepareConfig;

/// Persists the PrepareConfig in the output directory.
pub struct ManifestStore {
    /// Path to the directory the manifest lives in
    dir: PathBuf,
}

impl ManifestStore {
    /// Create a new ManifestStore.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        // create_dir_all creates parent directories too, like `mkdir -p`
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.join("prepare_config.json")
    }

    /// Save the preparation configuration to JSON.
    pub fn save_config(&self, cfg: &PrepareConfig) -> Result<()> {
        let path = self.config_path();

        // serde_json::to_string_pretty adds indentation for readability
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved prepare config to '{}'", path.display());
        Ok(())
    }

    /// Load a previously saved preparation configuration.
    /// Called by the preview use case when --manifest is given.
    pub fn load_config(&self) -> Result<PrepareConfig> {
        let path = self.config_path();

        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read config from '{}'. \
                 Make sure you have run 'prepare' first.",
                path.display()
            )
        })?;

        // Deserialise JSON back into a PrepareConfig struct
        Ok(serde_json::from_str(&json)?)
    }
}
