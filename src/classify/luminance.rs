//! RGB → luminance plane conversion.
use crate::image::{ImageF32, RgbImageU8};
use rayon::prelude::*;

/// Per-pixel unweighted channel mean `(R+G+B)/3` as an f32 plane.
///
/// Row-parallel; each output row depends only on its input row, so the
/// result is identical to a sequential pass.
pub fn luminance_plane(image: &RgbImageU8) -> ImageF32 {
    let mut plane = ImageF32::new(image.w, image.h);
    if image.w == 0 || image.h == 0 {
        return plane;
    }

    plane
        .data
        .par_chunks_mut(image.w)
        .zip(image.data.par_chunks(image.w * 3))
        .for_each(|(out_row, rgb_row)| {
            for (out, px) in out_row.iter_mut().zip(rgb_row.chunks_exact(3)) {
                *out = (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0;
            }
        });
    plane
}
