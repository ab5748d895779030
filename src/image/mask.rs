//! Boolean pixel mask matching a source image pixel-for-pixel.
//!
//! `true` marks a pixel belonging to the detected class (road, text
//! candidate). The mask shape always equals the source image shape; partial
//! masks do not exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    /// Mask width in pixels
    pub w: usize,
    /// Mask height in pixels
    pub h: usize,
    /// Row-major boolean grid, `w * h` entries
    pub data: Vec<bool>,
}

impl Mask {
    /// Construct an all-false mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![false; w * h],
        }
    }

    #[inline]
    /// Get the flag at (x, y).
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x]
    }

    #[inline]
    /// Set the flag at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: bool) {
        self.data[y * self.w + x] = v;
    }

    /// Number of `true` pixels.
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Fraction of `true` pixels, in [0, 1]. Zero for an empty mask.
    pub fn coverage(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.count_true() as f64 / self.data.len() as f64
    }
}
