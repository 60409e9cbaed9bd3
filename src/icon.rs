use std::path::Path;

use image::{DynamicImage, Rgba, RgbaImage};

use crate::error::PreviewError;

/// Supplies the representative icon shown when a file can't be imaged
pub trait IconProvider {
    fn icon_for(&self, path: &Path, size: u32) -> Result<DynamicImage, PreviewError>;
}

impl<F> IconProvider for F
where
    F: Fn(&Path, u32) -> Result<DynamicImage, PreviewError>,
{
    fn icon_for(&self, path: &Path, size: u32) -> Result<DynamicImage, PreviewError> {
        self(path, size)
    }
}

/// A plain document glyph, used when the host has no icon of its own
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericFileIcon;

impl GenericFileIcon {
    const PAPER: Rgba<u8> = Rgba([246, 246, 246, 255]);
    const OUTLINE: Rgba<u8> = Rgba([128, 128, 128, 255]);
    const FOLD: Rgba<u8> = Rgba([214, 214, 214, 255]);
    const TEXT: Rgba<u8> = Rgba([180, 180, 180, 255]);

    fn draw(size: u32) -> RgbaImage {
        let left = size / 5;
        let right = size - size / 5;
        let top = size / 10;
        let bottom = size - size / 10;
        let fold = size / 5;
        let border = (size / 128).max(1);

        RgbaImage::from_fn(size, size, |x, y| {
            if x < left || x >= right || y < top || y >= bottom {
                return Rgba([0, 0, 0, 0]);
            }
            // Distance into the folded top-right corner
            let dx = x - left;
            let dy = y - top;
            let corner_x = right - left - fold;
            if dx >= corner_x && dy < fold {
                let into_corner = (dx - corner_x) as i64 - dy as i64;
                return match into_corner {
                    d if d > 0 => Rgba([0, 0, 0, 0]),
                    d if d > -(border as i64) => Self::OUTLINE,
                    _ => Self::FOLD,
                };
            }
            if x < left + border
                || x >= right - border
                || y < top + border
                || y >= bottom - border
            {
                return Self::OUTLINE;
            }
            let line_pitch = (size / 16).max(2);
            let in_text_block = y > top + fold + border
                && y < bottom - fold / 2
                && x > left + fold / 2
                && x < right - fold / 2;
            if in_text_block && (y - top) % line_pitch < border {
                return Self::TEXT;
            }
            Self::PAPER
        })
    }
}

impl IconProvider for GenericFileIcon {
    fn icon_for(&self, _path: &Path, size: u32) -> Result<DynamicImage, PreviewError> {
        if size == 0 {
            return Err(PreviewError::IconUnavailable(
                "icon size must be non-zero".to_owned(),
            ));
        }
        Ok(DynamicImage::ImageRgba8(Self::draw(size)))
    }
}
