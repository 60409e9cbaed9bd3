use dotthz_container::container::Container;
use image::{DynamicImage, GrayImage};

use crate::{
    diagnostics::Diagnostics, encode, error::PreviewError, extract::find_imagable_dataset,
};

/// Extract, reduce, normalize and assemble. Any failure is returned as is, the caller falls back.
pub fn render_thumbnail<C: Container>(
    container: &C,
    diagnostics: Diagnostics<'_>,
) -> Result<GrayImage, PreviewError> {
    let cube = find_imagable_dataset(container, diagnostics)?;
    diagnostics.debug(format_args!(
        "Processing {} elements of '{}/{}'",
        cube.samples.len(),
        cube.group,
        cube.dataset
    ));
    let pixels = dotthz_thumbnail::render(cube.shape, &cube.samples)?;
    Ok(pixels.into_gray_image()?)
}

/// [`render_thumbnail`] followed by PNG encoding at the display size
pub fn render_thumbnail_png<C: Container>(
    container: &C,
    size: u32,
    diagnostics: Diagnostics<'_>,
) -> Result<Vec<u8>, PreviewError> {
    let thumbnail = render_thumbnail(container, diagnostics)?;
    Ok(encode::encode_png(&DynamicImage::ImageLuma8(thumbnail), size)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotthz_container::container::ContainerOpener as _;
    use dotthz_test_util::{
        MemoryContainer, MemoryDataset, MemoryGroup, MemoryOpener, SMALL_CUBE, SMALL_CUBE_SHAPE,
        TestResult,
    };
    use dotthz_thumbnail::ThumbnailError;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn opener_with(dataset: MemoryDataset) -> MemoryOpener {
        MemoryOpener::new(
            MemoryContainer::default().with_group(MemoryGroup::new("Image").dataset(dataset)),
        )
    }

    #[test]
    fn test_small_cube_thumbnail() -> TestResult {
        let opener = opener_with(MemoryDataset::new(
            "ds1",
            &SMALL_CUBE_SHAPE,
            SMALL_CUBE.to_vec(),
        ));
        let container = opener.open(Path::new("scan.thz"))?;

        let thumbnail = render_thumbnail(&container, Diagnostics::silent())?;
        assert_eq!(thumbnail.dimensions(), (2, 2));
        // Row y = 0 holds grid[0][0] and grid[1][0]
        assert_eq!(thumbnail.into_raw(), vec![255, 0, 255, 51]);
        Ok(())
    }

    #[test]
    fn test_empty_channel_axis() -> TestResult {
        let opener = opener_with(MemoryDataset::new("ds1", &[3, 3, 0], vec![]));
        let container = opener.open(Path::new("scan.thz"))?;

        let res = render_thumbnail(&container, Diagnostics::silent());
        assert!(matches!(
            res,
            Err(PreviewError::Thumbnail(ThumbnailError::EmptyChannelAxis))
        ));
        Ok(())
    }

    #[test]
    fn test_empty_grid() -> TestResult {
        let opener = opener_with(MemoryDataset::new("ds1", &[0, 3, 2], vec![]));
        let container = opener.open(Path::new("scan.thz"))?;

        let res = render_thumbnail(&container, Diagnostics::silent());
        assert!(matches!(
            res,
            Err(PreviewError::Thumbnail(ThumbnailError::EmptyGrid))
        ));
        Ok(())
    }

    #[test]
    fn test_png_has_display_size() -> TestResult {
        let opener = opener_with(MemoryDataset::new(
            "ds1",
            &SMALL_CUBE_SHAPE,
            SMALL_CUBE.to_vec(),
        ));
        let container = opener.open(Path::new("scan.thz"))?;

        let png = render_thumbnail_png(&container, 64, Diagnostics::silent())?;
        let decoded = image::load_from_memory(&png)?;
        assert_eq!((decoded.width(), decoded.height()), (64, 64));
        Ok(())
    }
}
