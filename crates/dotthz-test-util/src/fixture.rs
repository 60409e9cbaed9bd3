//! Writes small DotTHz-like HDF5 files into temporary directories

use std::path::{Path, PathBuf};

use hdf5::{
    H5Type,
    types::{FixedAscii, VarLenUnicode},
};
use tempfile::TempDir;
use testresult::TestResult;

#[derive(Debug, Clone, PartialEq)]
pub enum FixtureAttr {
    Float(f64),
    Int(i64),
    Text(String),
    /// A null padded fixed-length ASCII string, at most 32 bytes
    FixedText(String),
    /// A compound value, neither numeric nor string
    Compound,
}

#[derive(Debug, Clone)]
enum FixtureData {
    F32(Vec<f32>),
    F64(Vec<f64>),
    Text(Vec<String>),
}

#[derive(Debug, Clone)]
struct FixtureDataset {
    name: String,
    shape: Vec<usize>,
    data: FixtureData,
}

#[derive(Debug, Clone, Default)]
struct FixtureGroup {
    name: String,
    datasets: Vec<FixtureDataset>,
    attrs: Vec<(String, FixtureAttr)>,
}

#[derive(Clone, Copy, H5Type)]
#[repr(C)]
struct Calibration {
    offset: i32,
    gain: f32,
}

/// Builds an HDF5 file group by group. Datasets and attributes go into the most recently added group.
#[derive(Debug, Clone)]
pub struct FixtureBuilder {
    file_name: String,
    groups: Vec<FixtureGroup>,
}

impl Default for FixtureBuilder {
    fn default() -> Self {
        Self {
            file_name: "scan.thz".to_owned(),
            groups: Vec::new(),
        }
    }
}

impl FixtureBuilder {
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    pub fn group(mut self, name: impl Into<String>) -> Self {
        self.groups.push(FixtureGroup {
            name: name.into(),
            ..Default::default()
        });
        self
    }

    pub fn dataset(self, name: impl Into<String>, shape: &[usize], data: Vec<f32>) -> Self {
        self.push_dataset(name.into(), shape, FixtureData::F32(data))
    }

    pub fn f64_dataset(self, name: impl Into<String>, shape: &[usize], data: Vec<f64>) -> Self {
        self.push_dataset(name.into(), shape, FixtureData::F64(data))
    }

    /// A dataset of strings, which can't be read as floats
    pub fn text_dataset(self, name: impl Into<String>, shape: &[usize], data: Vec<String>) -> Self {
        self.push_dataset(name.into(), shape, FixtureData::Text(data))
    }

    pub fn attr(mut self, name: impl Into<String>, value: FixtureAttr) -> Self {
        self.last_group().attrs.push((name.into(), value));
        self
    }

    fn push_dataset(mut self, name: String, shape: &[usize], data: FixtureData) -> Self {
        self.last_group().datasets.push(FixtureDataset {
            name,
            shape: shape.to_vec(),
            data,
        });
        self
    }

    fn last_group(&mut self) -> &mut FixtureGroup {
        assert!(
            !self.groups.is_empty(),
            "Add a group before adding datasets or attributes"
        );
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    /// Write the file into a fresh temporary directory
    pub fn write(self) -> TestResult<Hdf5Fixture> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(&self.file_name);
        let file = hdf5::File::create(&path)?;
        for group in &self.groups {
            let h5_group = file.create_group(&group.name)?;
            for dataset in &group.datasets {
                write_dataset(&h5_group, dataset)?;
            }
            for (name, value) in &group.attrs {
                write_attr(&h5_group, name, value)?;
            }
        }
        file.close()?;
        log::debug!("Wrote fixture {}", path.display());
        Ok(Hdf5Fixture { _dir: dir, path })
    }
}

fn write_dataset(group: &hdf5::Group, dataset: &FixtureDataset) -> TestResult {
    let shape = dataset.shape.clone();
    match &dataset.data {
        FixtureData::F32(values) => write_values(group, &dataset.name, shape, values)?,
        FixtureData::F64(values) => write_values(group, &dataset.name, shape, values)?,
        FixtureData::Text(values) => {
            let values = values
                .iter()
                .map(|v| v.parse::<VarLenUnicode>())
                .collect::<Result<Vec<_>, _>>()?;
            write_values(group, &dataset.name, shape, &values)?;
        }
    }
    Ok(())
}

fn write_values<T: H5Type>(
    group: &hdf5::Group,
    name: &str,
    shape: Vec<usize>,
    values: &[T],
) -> TestResult {
    let ds = group.new_dataset::<T>().shape(shape).create(name)?;
    if !values.is_empty() {
        ds.write_raw(values)?;
    }
    Ok(())
}

fn write_attr(group: &hdf5::Group, name: &str, value: &FixtureAttr) -> TestResult {
    match value {
        FixtureAttr::Float(v) => group.new_attr::<f64>().create(name)?.write_scalar(v)?,
        FixtureAttr::Int(v) => group.new_attr::<i64>().create(name)?.write_scalar(v)?,
        FixtureAttr::Text(v) => {
            let v: VarLenUnicode = v.parse()?;
            group
                .new_attr::<VarLenUnicode>()
                .create(name)?
                .write_scalar(&v)?;
        }
        FixtureAttr::FixedText(v) => {
            let v = FixedAscii::<32>::from_ascii(v.as_bytes())?;
            group
                .new_attr::<FixedAscii<32>>()
                .create(name)?
                .write_scalar(&v)?;
        }
        FixtureAttr::Compound => group
            .new_attr::<Calibration>()
            .create(name)?
            .write_scalar(&Calibration {
                offset: 7,
                gain: 0.5,
            })?,
    }
    Ok(())
}

/// An HDF5 file that is deleted together with its directory when dropped
#[derive(Debug)]
pub struct Hdf5Fixture {
    _dir: TempDir,
    path: PathBuf,
}

impl Hdf5Fixture {
    pub fn path(&self) -> &Path {
        &self.path
    }
}
