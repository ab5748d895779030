//! 5×5 uniform smoothing with border clamping.
//!
//! The kernel is separable (`[1,1,1,1,1]/5` in each axis), and clamping the
//! x and y coordinates independently makes the two-pass result exactly equal
//! to the full 2D convolution with replicated borders.
use crate::image::ImageF32;

const RADIUS: isize = 2;
const TAPS: f32 = 5.0;

/// Convolve with a 5×5 uniform averaging kernel, clamping at the borders.
pub fn box_filter_5x5(src: &ImageF32) -> ImageF32 {
    if src.w == 0 || src.h == 0 {
        return ImageF32::new(src.w, src.h);
    }
    vertical_pass(&horizontal_pass(src))
}

fn horizontal_pass(src: &ImageF32) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let mut out = ImageF32::new(w, h);
    let max_x = w as isize - 1;
    for y in 0..h {
        let row = src.row(y);
        let out_row = out.row_mut(y);
        for (x, o) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0;
            for dx in -RADIUS..=RADIUS {
                let xx = (x as isize + dx).clamp(0, max_x) as usize;
                sum += row[xx];
            }
            *o = sum / TAPS;
        }
    }
    out
}

fn vertical_pass(src: &ImageF32) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let mut out = ImageF32::new(w, h);
    let max_y = h as isize - 1;
    for y in 0..h {
        let rows: Vec<&[f32]> = (-RADIUS..=RADIUS)
            .map(|dy| src.row((y as isize + dy).clamp(0, max_y) as usize))
            .collect();
        let out_row = out.row_mut(y);
        for (x, o) in out_row.iter_mut().enumerate() {
            let sum: f32 = rows.iter().map(|r| r[x]).sum();
            *o = sum / TAPS;
        }
    }
    out
}
