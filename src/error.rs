use dotthz_container::error::ContainerError;
use dotthz_thumbnail::ThumbnailError;
use thiserror::Error;

/// Everything that can send a preview down the fallback path.
///
/// None of these reach the host, [`crate::PreviewComposer::compose`] always produces a document.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Failed to open container: {0}")]
    ContainerOpenFailed(#[source] ContainerError),
    #[error("No dataset with exactly 3 axes")]
    NoImagableDataset,
    #[error("Failed reading dataset '{dataset}': {reason}")]
    DatasetReadFailed { dataset: String, reason: String },
    #[error(transparent)]
    Thumbnail(#[from] ThumbnailError),
    #[error("Failed encoding image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("No icon available: {0}")]
    IconUnavailable(String),
}
