//! Owned 3-channel RGB image in row-major, interleaved layout.
//!
//! The classification pipeline only ever sees tightly packed buffers
//! (`data.len() == w * h * 3`), so no stride bookkeeping is carried.
#[derive(Clone, Debug)]
pub struct RgbImageU8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Interleaved RGB bytes, `w * h * 3` of them
    pub data: Vec<u8>,
}

impl RgbImageU8 {
    /// Construct a zero-initialized (black) image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h * 3],
        }
    }

    /// Wrap raw interleaved RGB bytes. The buffer length must match the
    /// stated dimensions; a mismatch is a programming error upstream.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            w * h * 3,
            "RGB buffer length does not match {w}x{h} dimensions"
        );
        Self { w, h, data }
    }

    #[inline]
    /// Byte offset of the R channel of pixel (x, y).
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * 3
    }

    #[inline]
    /// Get the `[r, g, b]` triple at (x, y).
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = self.idx(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    /// Set the `[r, g, b]` triple at (x, y).
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = self.idx(x, y);
        self.data[i..i + 3].copy_from_slice(&px);
    }

    /// Borrow one row as an interleaved RGB byte slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w * 3;
        &self.data[start..start + self.w * 3]
    }
}
