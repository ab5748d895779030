//! Serializable summary of one map analysis run.
use crate::image::{Mask, RgbImageU8};
use serde::Serialize;

/// What the classifiers found, with the parameters they ran under.
///
/// Emitted as JSON next to the diagnostic overlay image by `analyze_map`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapAnalysisReport {
    pub width: usize,
    pub height: usize,
    pub road_threshold: u8,
    pub road_pixel_count: usize,
    /// Fraction of the image classified as road, in [0, 1].
    pub road_coverage: f64,
    pub text_percentile: f32,
    pub text_candidate_count: usize,
}

impl MapAnalysisReport {
    pub fn new(
        image: &RgbImageU8,
        road: &Mask,
        text: &Mask,
        road_threshold: u8,
        text_percentile: f32,
    ) -> Self {
        Self {
            width: image.w,
            height: image.h,
            road_threshold,
            road_pixel_count: road.count_true(),
            road_coverage: road.coverage(),
            text_percentile,
            text_candidate_count: text.count_true(),
        }
    }
}
