//! JSON configuration for the CLI tools.
pub mod analyze;
pub mod graph;

pub use analyze::AnalyzeToolConfig;
pub use graph::GraphToolConfig;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and deserialize a JSON config file.
pub fn read_json_config<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
