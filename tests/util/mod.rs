use dotthz_hdf5::Hdf5Opener;
use dotthz_preview::{Diagnostics, GenericFileIcon, PreviewComposer, PreviewConfig};
use dotthz_test_util::CaptureLog;

pub use dotthz_test_util::{FixtureAttr, FixtureBuilder, SMALL_CUBE, SMALL_CUBE_SHAPE, TestResult};

pub type Hdf5Composer<'a> = PreviewComposer<'a, Hdf5Opener, GenericFileIcon>;

/// A composer reading real HDF5 files and recording its diagnostics into `log`
pub fn hdf5_composer(log: &CaptureLog) -> Hdf5Composer<'_> {
    PreviewComposer::new(
        Hdf5Opener,
        GenericFileIcon,
        PreviewConfig::default(),
        Diagnostics::new(log),
    )
}

/// Decode the PNG of a document's visual as 8-bit grayscale
pub fn decode_luma(png: &[u8]) -> TestResult<image::GrayImage> {
    Ok(image::load_from_memory(png)?.to_luma8())
}
