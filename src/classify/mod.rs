//! Per-pixel classification of the source map raster.
//!
//! Two heuristic classifiers, both producing a [`Mask`] with the exact shape
//! of the input image:
//!
//! - [`road_mask`] — roads/paths are drawn as dark strokes on the source map,
//!   so a pixel counts as road when its unweighted channel-mean luminance
//!   falls strictly below a threshold. Sub-pixel color nuance is not needed
//!   for the coarse validation mask this feeds.
//! - [`text_candidate_mask`] — text glyphs produce high local contrast at
//!   fine spatial scale. Luminance is smoothed with a 5×5 uniform kernel, the
//!   squared deviation from that local mean is smoothed again to get a local
//!   variance, and pixels above a whole-image variance percentile are marked.
//!   This locates "something small and detailed is here"; it never decodes
//!   characters and does not bound individual letters precisely. Downstream
//!   consumers must treat it as a hint requiring manual confirmation, not as
//!   an authoritative label locator.
//!
//! Both classifiers are pure per-pixel/per-neighborhood functions; the
//! luminance conversion is row-parallel and bit-identical to a sequential
//! pass.
mod luminance;
mod smooth;
mod stats;

#[cfg(test)]
mod tests;

pub use luminance::luminance_plane;
pub use smooth::box_filter_5x5;
pub use stats::percentile;

use crate::image::{ImageF32, Mask, RgbImageU8};
use log::debug;
use thiserror::Error;

/// Default luminance cut for [`road_mask`].
pub const DEFAULT_ROAD_THRESHOLD: u8 = 80;
/// Default variance percentile for [`text_candidate_mask`].
pub const DEFAULT_TEXT_PERCENTILE: f32 = 85.0;

/// Classification precondition violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    /// The requested percentile is outside [0, 100].
    #[error("percentile {0} is outside [0, 100]")]
    PercentileOutOfRange(f32),
}

/// Mark pixels whose mean luminance `(R+G+B)/3` is strictly below `threshold`.
///
/// Lowering the threshold never marks more pixels (stricter darkness
/// requirement).
pub fn road_mask(image: &RgbImageU8, threshold: u8) -> Mask {
    let lum = luminance_plane(image);
    let cut = threshold as f32;
    let mut mask = Mask::new(image.w, image.h);
    for (out, &v) in mask.data.iter_mut().zip(&lum.data) {
        *out = v < cut;
    }
    debug!(
        "road mask: {} of {} pixels below threshold {}",
        mask.count_true(),
        mask.data.len(),
        threshold
    );
    mask
}

/// Mark pixels whose local luminance variance strictly exceeds the given
/// percentile of the whole-image variance distribution.
///
/// A flat-color image has zero variance everywhere, so no pixel strictly
/// exceeds any percentile of its distribution and the mask comes back all
/// false — an expected edge case, not an error.
pub fn text_candidate_mask(image: &RgbImageU8, percentile_value: f32) -> Result<Mask, ClassifyError> {
    if !percentile_value.is_finite() || !(0.0..=100.0).contains(&percentile_value) {
        return Err(ClassifyError::PercentileOutOfRange(percentile_value));
    }

    let lum = luminance_plane(image);
    let local_mean = box_filter_5x5(&lum);

    let mut sq_dev = ImageF32::new(lum.w, lum.h);
    for ((out, &v), &m) in sq_dev.data.iter_mut().zip(&lum.data).zip(&local_mean.data) {
        let d = v - m;
        *out = d * d;
    }
    let local_var = box_filter_5x5(&sq_dev);

    let cut = percentile(&local_var.data, percentile_value);
    let mut mask = Mask::new(image.w, image.h);
    for (out, &v) in mask.data.iter_mut().zip(&local_var.data) {
        *out = v > cut;
    }
    debug!(
        "text-candidate mask: {} of {} pixels above p{} variance {:.3}",
        mask.count_true(),
        mask.data.len(),
        percentile_value,
        cut
    );
    Ok(mask)
}
