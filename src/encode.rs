use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{DynamicImage, ImageFormat, imageops::FilterType};

/// Scale to `size`x`size` with nearest neighbour sampling and encode as PNG.
///
/// Nearest neighbour keeps every thumbnail pixel a crisp block, no new intensities are made up.
pub fn encode_png(image: &DynamicImage, size: u32) -> image::ImageResult<Vec<u8>> {
    let mut png = Vec::new();
    let mut writer = Cursor::new(&mut png);
    if image.width() == size && image.height() == size {
        image.write_to(&mut writer, ImageFormat::Png)?;
    } else {
        image
            .resize_exact(size, size, FilterType::Nearest)
            .write_to(&mut writer, ImageFormat::Png)?;
    }
    Ok(png)
}

/// Inline PNG bytes as a `data:` URI
pub fn png_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}
