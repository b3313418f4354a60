//! JSON configuration for the `extract_graphs` tool.
use crate::ExtractParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ExtractToolConfig {
    /// Label raster to process (8- or 16-bit grayscale).
    pub input: PathBuf,
    /// Run identifier embedded in every output file name.
    pub run_id: String,
    /// Directory receiving the `_ed`/`_ve` file pairs.
    pub output_dir: PathBuf,
    /// Optional path for a JSON run summary.
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
    /// Pipeline parameters; omitted fields fall back to the defaults.
    #[serde(default)]
    pub params: ExtractParams,
}

pub fn load_config(path: &Path) -> Result<ExtractToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
