//! Thumbnail synthesis for rank-3 measurement cubes.
//!
//! A cube of shape `[width, height, channels]` is reduced to one magnitude per pixel
//! ([`magnitude_grid`]), rescaled against its global maximum and quantized to 8 bits
//! ([`normalize`]), then laid out as a grayscale [`PixelBuffer`] ready for encoding.

pub mod error;
pub mod magnitude;
pub mod normalize;
pub mod pixel_buffer;

pub use {
    error::ThumbnailError,
    magnitude::{CubeShape, MagnitudeGrid, magnitude_grid},
    normalize::{IntensityGrid, normalize},
    pixel_buffer::PixelBuffer,
};

/// Run the whole reduction for a cube in one go
pub fn render(shape: CubeShape, samples: &[f32]) -> Result<PixelBuffer, ThumbnailError> {
    let magnitudes = magnitude_grid(shape, samples)?;
    let intensities = normalize(&magnitudes);
    Ok(PixelBuffer::from_intensity(&intensities))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test]
    fn test_render_small_cube() -> TestResult {
        #[rustfmt::skip]
        let samples = [
            3., 4., 0.,   0., 0., 5.,
            0., 0., 0.,   1., 0., 0.,
        ];
        let pixels = render(CubeShape::new(2, 2, 3), &samples)?;

        // x is the column, y the row
        assert_eq!(pixels.pixel(0, 0), Some(255));
        assert_eq!(pixels.pixel(0, 1), Some(255));
        assert_eq!(pixels.pixel(1, 0), Some(0));
        assert_eq!(pixels.pixel(1, 1), Some(51));
        assert_eq!(pixels.data(), &[255, 0, 255, 51]);
        Ok(())
    }

    #[test]
    fn test_render_rejects_degenerate_cube() {
        assert!(matches!(
            render(CubeShape::new(2, 2, 0), &[]),
            Err(ThumbnailError::EmptyChannelAxis)
        ));
        assert!(matches!(
            render(CubeShape::new(0, 4, 2), &[]),
            Err(ThumbnailError::EmptyGrid)
        ));
    }
}
