use ndarray::Array2;
use rayon::prelude::*;

use crate::error::ThumbnailError;

/// One non-negative magnitude per `(x, y)` position, shape `[width, height]`
pub type MagnitudeGrid = Array2<f64>;

/// Shape of a rank-3 cube, the last axis is the one collapsed into a magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeShape {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl CubeShape {
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Build from a dataset shape, `None` unless it has exactly 3 axes
    pub fn from_dims(dims: &[usize]) -> Option<Self> {
        match *dims {
            [width, height, channels] => Some(Self::new(width, height, channels)),
            _ => None,
        }
    }

    pub fn pixel_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    pub fn element_count(&self) -> Option<usize> {
        self.pixel_count()?.checked_mul(self.channels)
    }
}

/// Collapse the channel axis of a row-major cube with the euclidean norm.
///
/// Squares are accumulated in `f64`, so no finite `f32` input can overflow.
pub fn magnitude_grid(shape: CubeShape, samples: &[f32]) -> Result<MagnitudeGrid, ThumbnailError> {
    if shape.channels == 0 {
        return Err(ThumbnailError::EmptyChannelAxis);
    }
    let overflow = ThumbnailError::DimensionOverflow {
        width: shape.width,
        height: shape.height,
        channels: shape.channels,
    };
    let pixels = shape.pixel_count().ok_or(overflow)?;
    if pixels == 0 {
        return Err(ThumbnailError::EmptyGrid);
    }
    let expected = shape.element_count().ok_or(overflow)?;
    if samples.len() != expected {
        return Err(ThumbnailError::ShapeMismatch {
            expected,
            actual: samples.len(),
        });
    }

    let magnitudes: Vec<f64> = samples
        .par_chunks_exact(shape.channels)
        .map(channel_norm)
        .collect();

    Array2::from_shape_vec((shape.width, shape.height), magnitudes).map_err(|_| {
        ThumbnailError::ShapeMismatch {
            expected: pixels,
            actual: samples.len() / shape.channels,
        }
    })
}

#[inline]
fn channel_norm(lane: &[f32]) -> f64 {
    lane.iter()
        .map(|&sample| {
            let sample = f64::from(sample);
            sample * sample
        })
        .sum::<f64>()
        .sqrt()
}
