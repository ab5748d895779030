use crate::graph::DEFAULT_POLYLINE_POINTS;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config for the `export_graph` tool.
///
/// `nodes` and `connections` point at external JSON files; when omitted,
/// the bundled campus sample data is used instead.
#[derive(Debug, Deserialize)]
pub struct GraphToolConfig {
    /// Node definitions: an array of `{id, name, x, y}` records.
    #[serde(default)]
    pub nodes: Option<PathBuf>,
    /// Connections: an array of `{source, target}` node id pairs.
    #[serde(default)]
    pub connections: Option<PathBuf>,
    /// Polyline sample count per edge.
    #[serde(default = "default_num_points")]
    pub num_points: usize,
    pub output: GraphOutputConfig,
}

fn default_num_points() -> usize {
    DEFAULT_POLYLINE_POINTS
}

/// One requested node connection.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ConnectionDef {
    pub source: u32,
    pub target: u32,
}

#[derive(Debug, Deserialize)]
pub struct GraphOutputConfig {
    #[serde(rename = "nodes_json")]
    pub nodes_json: PathBuf,
    #[serde(rename = "edges_json")]
    pub edges_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<GraphToolConfig, String> {
    super::read_json_config(path)
}
