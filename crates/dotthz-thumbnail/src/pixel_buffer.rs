use getset::{CopyGetters, Getters};
use image::GrayImage;

use crate::{error::ThumbnailError, normalize::IntensityGrid};

/// Single channel, 8 bits per pixel, rows of `width` bytes.
///
/// Image width is the grid's first axis and image height its second, so pixel `(x, y)`
/// holds `grid[[x, y]]` and lives at offset `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters, Getters)]
pub struct PixelBuffer {
    #[getset(get_copy = "pub")]
    width: usize,
    #[getset(get_copy = "pub")]
    height: usize,
    #[getset(get = "pub")]
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn from_intensity(grid: &IntensityGrid) -> Self {
        let (width, height) = grid.dim();
        // Iterating the transposed view walks row by row of the image
        let data: Vec<u8> = grid.t().iter().copied().collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride() + x).copied()
    }

    /// Hand the buffer over to the `image` crate for encoding
    pub fn into_gray_image(self) -> Result<GrayImage, ThumbnailError> {
        let too_large = ThumbnailError::ImageTooLarge {
            width: self.width,
            height: self.height,
        };
        let (Ok(width), Ok(height)) = (u32::try_from(self.width), u32::try_from(self.height))
        else {
            return Err(too_large);
        };
        GrayImage::from_raw(width, height, self.data).ok_or(too_large)
    }
}
