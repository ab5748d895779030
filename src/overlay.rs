//! Diagnostic mask-over-image compositing.
//!
//! Purely an inspection aid for checking classification output against the
//! source raster; graph construction never depends on it.
use crate::image::{Mask, RgbImageU8};
use thiserror::Error;

/// Highlight color and opacity for [`overlay_mask`].
#[derive(Clone, Copy, Debug)]
pub struct OverlayStyle {
    /// RGB highlight color blended over masked pixels.
    pub color: [u8; 3],
    /// Blend opacity, 0 (invisible) to 255 (fully opaque).
    pub opacity: u8,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        // Semi-transparent red, matching the original analysis output.
        Self {
            color: [255, 0, 0],
            opacity: 100,
        }
    }
}

/// Overlay compositing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// Mask dimensions do not match the image dimensions.
    #[error("mask shape {mask_w}x{mask_h} does not match image shape {image_w}x{image_h}")]
    ShapeMismatch {
        image_w: usize,
        image_h: usize,
        mask_w: usize,
        mask_h: usize,
    },
}

/// Blend `style.color` into `image` wherever `mask` is true; all other
/// pixels pass through unchanged. The composite has the same dimensions as
/// the input.
pub fn overlay_mask(
    image: &RgbImageU8,
    mask: &Mask,
    style: OverlayStyle,
) -> Result<RgbImageU8, OverlayError> {
    if image.w != mask.w || image.h != mask.h {
        return Err(OverlayError::ShapeMismatch {
            image_w: image.w,
            image_h: image.h,
            mask_w: mask.w,
            mask_h: mask.h,
        });
    }

    let alpha = style.opacity as u16;
    let inv = 255 - alpha;
    let mut out = image.clone();
    for (i, &hit) in mask.data.iter().enumerate() {
        if !hit {
            continue;
        }
        let base = i * 3;
        for c in 0..3 {
            let blended =
                (out.data[base + c] as u16 * inv + style.color[c] as u16 * alpha) / 255;
            out.data[base + c] = blended as u8;
        }
    }
    Ok(out)
}
