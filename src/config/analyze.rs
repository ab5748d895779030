use crate::classify::{DEFAULT_ROAD_THRESHOLD, DEFAULT_TEXT_PERCENTILE};
use crate::overlay::OverlayStyle;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config for the `analyze_map` tool.
#[derive(Debug, Deserialize)]
pub struct AnalyzeToolConfig {
    /// Source raster (PNG/JPEG/...).
    pub input: PathBuf,
    #[serde(default)]
    pub classify: ClassifyConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    pub output: AnalyzeOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Luminance cut for the road mask, 0–255.
    pub road_threshold: u8,
    /// Variance percentile for the text-candidate mask, 0–100.
    pub text_percentile: f32,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            road_threshold: DEFAULT_ROAD_THRESHOLD,
            text_percentile: DEFAULT_TEXT_PERCENTILE,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// RGB highlight for road pixels in the composite.
    pub color: [u8; 3],
    /// Blend opacity, 0–255.
    pub opacity: u8,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        let style = OverlayStyle::default();
        Self {
            color: style.color,
            opacity: style.opacity,
        }
    }
}

impl OverlayConfig {
    pub fn style(&self) -> OverlayStyle {
        OverlayStyle {
            color: self.color,
            opacity: self.opacity,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeOutputConfig {
    #[serde(rename = "overlay_image")]
    pub overlay_image: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<AnalyzeToolConfig, String> {
    super::read_json_config(path)
}
