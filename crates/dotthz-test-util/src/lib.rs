pub mod capture;
pub mod fixture;
pub mod memory;

pub use {
    capture::CaptureLog,
    fixture::{FixtureAttr, FixtureBuilder, Hdf5Fixture},
    memory::{MemoryAttr, MemoryContainer, MemoryDataset, MemoryGroup, MemoryHandle, MemoryOpener},
    testresult::TestResult,
};

/// The 2x2x3 cube with known magnitudes `[[5, 5], [0, 1]]`
#[rustfmt::skip]
pub const SMALL_CUBE: [f32; 12] = [
    3., 4., 0.,   0., 0., 5.,
    0., 0., 0.,   1., 0., 0.,
];

pub const SMALL_CUBE_SHAPE: [usize; 3] = [2, 2, 3];
