//! Owned label raster in row-major layout (stride == width).
//!
//! Each pixel holds a region id: 0 is background, 1 is reserved for the
//! segmentation boundary, region labels start at 2.
#[derive(Clone, Debug)]
pub struct LabelImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of u32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<u32>,
}

impl LabelImage {
    /// Construct a background-only (all-zero) raster of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h],
        }
    }

    /// Wrap an existing row-major buffer; `data.len()` must equal `w * h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u32>) -> Result<Self, String> {
        if data.len() != w * h {
            return Err(format!(
                "label buffer length {} does not match {}x{}",
                data.len(),
                w,
                h
            ));
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the label at (x, y).
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the label at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: u32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl crate::image::traits::ImageView for LabelImage {
    type Pixel = u32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u32]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
