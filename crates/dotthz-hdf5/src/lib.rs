pub mod container;
pub(crate) mod util;

pub use container::{Hdf5Container, Hdf5Dataset, Hdf5Group, Hdf5Opener};

// File extensions we recognize as DotTHz or plain HDF5 files.
const POSSIBLE_DOTTHZ_EXTENSIONS_CASE_INSENSITIVE: [&str; 4] = ["thz", "h5", "hdf5", "hdf"];

pub fn path_has_dotthz_extension(path: &std::path::Path) -> bool {
    let Some(extension) = path.extension() else {
        return false;
    };

    POSSIBLE_DOTTHZ_EXTENSIONS_CASE_INSENSITIVE
        .iter()
        .any(|possible_extension| extension.eq_ignore_ascii_case(possible_extension))
}
