use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::style::DEFAULT_THRESHOLD;

// ---------------------------------------------------------------------------
// BoardConfig – where the data lives and how cells are judged
// ---------------------------------------------------------------------------

/// Runtime configuration, read from an optional JSON file. Every field has
/// a default, so a missing config file means "use the conventions of the
/// original dashboard".
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Sales-actions table.
    pub actions_path: PathBuf,
    /// Hourly-management (CRM) table.
    pub crm_path: PathBuf,
    /// Threshold for the Total / GESTIONES cell coloring.
    pub threshold: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            actions_path: PathBuf::from("dados_analisados.csv"),
            crm_path: PathBuf::from("HORA.csv"),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl BoardConfig {
    /// Read configuration from `path` if it exists, defaults otherwise.
    /// A file that exists but does not parse is an error, not a default.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Point both tables at a directory, keeping the conventional file
    /// names. Used by the File → Open data folder dialog.
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.actions_path = dir.join("dados_analisados.csv");
        self.crm_path = dir.join("HORA.csv");
        self
    }
}
