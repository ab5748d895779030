use map_graph::image::RgbImageU8;

/// Generates a flat-color RGB image.
pub fn solid_rgb(width: usize, height: usize, color: [u8; 3]) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = RgbImageU8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(x, y, color);
        }
    }
    img
}

/// Generates an image with a hard vertical step: dark left half, bright
/// right half. The step produces high local variance near `split_x`.
pub fn step_rgb(width: usize, height: usize, split_x: usize) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = RgbImageU8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = if x < split_x { 20u8 } else { 220u8 };
            img.set(x, y, [v, v, v]);
        }
    }
    img
}

/// Generates a horizontal luminance ramp from 0 to 255 across the width.
pub fn ramp_rgb(width: usize, height: usize) -> RgbImageU8 {
    assert!(width > 1 && height > 0, "ramp needs at least two columns");
    let mut img = RgbImageU8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1)) as u8;
            img.set(x, y, [v, v, v]);
        }
    }
    img
}
