use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThumbnailError {
    #[error("The channel axis is empty")]
    EmptyChannelAxis,
    #[error("The pixel grid is empty")]
    EmptyGrid,
    #[error("Expected {expected} samples, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("Cube dimensions {width}x{height}x{channels} overflow")]
    DimensionOverflow {
        width: usize,
        height: usize,
        channels: usize,
    },
    #[error("Image of {width}x{height} pixels is too large to encode")]
    ImageTooLarge { width: usize, height: usize },
}
