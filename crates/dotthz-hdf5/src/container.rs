use std::path::Path;

use dotthz_container::prelude::*;

use crate::util;

/// Opens DotTHz files with the HDF5 library
#[derive(Debug, Default, Clone, Copy)]
pub struct Hdf5Opener;

impl ContainerOpener for Hdf5Opener {
    type Container = Hdf5Container;

    fn open(&self, path: &Path) -> ContainerResult<Self::Container> {
        let file = hdf5::File::open(path).map_err(|e| ContainerError::open(path, e))?;
        log::debug!("Opened HDF5 file {}", file.filename());
        Ok(Hdf5Container { file })
    }
}

/// A read-only HDF5 file. The file is closed when this is dropped.
#[derive(Debug)]
pub struct Hdf5Container {
    file: hdf5::File,
}

impl Container for Hdf5Container {
    type Group = Hdf5Group;

    fn group_names(&self) -> ContainerResult<Vec<String>> {
        let groups = self
            .file
            .groups()
            .map_err(|e| ContainerError::read(self.file.filename(), e))?;
        Ok(groups.iter().map(|g| util::member_name(g)).collect())
    }

    fn open_group(&self, name: &str) -> ContainerResult<Self::Group> {
        let group = self
            .file
            .group(name)
            .map_err(|e| ContainerError::read(name, e))?;
        Ok(Hdf5Group { group })
    }
}

#[derive(Debug)]
pub struct Hdf5Group {
    group: hdf5::Group,
}

impl Hdf5Group {
    fn attr(&self, name: &str) -> ContainerResult<hdf5::Attribute> {
        self.group.attr(name).map_err(|e| {
            log::debug!("Failed opening attribute '{name}': {e}");
            ContainerError::NotFound(name.to_owned())
        })
    }
}

impl Group for Hdf5Group {
    type Dataset = Hdf5Dataset;

    fn dataset_names(&self) -> ContainerResult<Vec<String>> {
        let datasets = self
            .group
            .datasets()
            .map_err(|e| ContainerError::read(self.group.name(), e))?;
        Ok(datasets.iter().map(|ds| util::member_name(ds)).collect())
    }

    fn open_dataset(&self, name: &str) -> ContainerResult<Self::Dataset> {
        let dataset = self
            .group
            .dataset(name)
            .map_err(|e| ContainerError::read(name, e))?;
        Ok(Hdf5Dataset { dataset })
    }

    fn attribute_names(&self) -> ContainerResult<Vec<String>> {
        self.group
            .attr_names()
            .map_err(|e| ContainerError::read(self.group.name(), e))
    }

    fn read_numeric_attribute(&self, name: &str) -> ContainerResult<f64> {
        let attr = self.attr(name)?;
        util::read_numeric_attribute(&attr).map_err(|e| ContainerError::read(name, e))
    }

    fn read_string_attribute(&self, name: &str) -> ContainerResult<String> {
        let attr = self.attr(name)?;
        util::read_string_attribute(&attr).map_err(|e| ContainerError::read(name, e))
    }
}

#[derive(Debug)]
pub struct Hdf5Dataset {
    dataset: hdf5::Dataset,
}

impl Dataset for Hdf5Dataset {
    fn shape(&self) -> Vec<usize> {
        self.dataset.shape()
    }

    fn read_floats(&self) -> ContainerResult<Vec<f32>> {
        // HDF5 converts integer and double precision datasets on the fly
        self.dataset
            .read_raw::<f32>()
            .map_err(|e| ContainerError::read(self.dataset.name(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotthz_container::attribute::AttributeValue;
    use dotthz_test_util::fixture::{FixtureAttr, FixtureBuilder};
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    fn open_fixture(builder: FixtureBuilder) -> TestResult<(dotthz_test_util::fixture::Hdf5Fixture, Hdf5Container)> {
        let fixture = builder.write()?;
        let container = Hdf5Opener.open(fixture.path())?;
        Ok((fixture, container))
    }

    #[test_log::test]
    fn test_lists_groups_and_datasets() -> TestResult {
        let (_fixture, container) = open_fixture(
            FixtureBuilder::default()
                .group("Image")
                .dataset("ds1", &[2, 3, 4], vec![1.0; 24])
                .dataset("ds2", &[5], vec![0.0; 5])
                .group("Meta"),
        )?;

        assert_eq!(container.group_names()?, vec!["Image", "Meta"]);
        let image = container.open_group("Image")?;
        assert_eq!(image.dataset_names()?, vec!["ds1", "ds2"]);
        let ds1 = image.open_dataset("ds1")?;
        assert_eq!(ds1.shape(), vec![2, 3, 4]);
        assert_eq!(ds1.read_floats()?.len(), 24);
        Ok(())
    }

    #[test_log::test]
    fn test_reads_double_precision_dataset() -> TestResult {
        let (_fixture, container) = open_fixture(
            FixtureBuilder::default()
                .group("Image")
                .f64_dataset("ds1", &[1, 1, 3], vec![0.5, -1.5, 2.25]),
        )?;

        let ds = container.open_group("Image")?.open_dataset("ds1")?;
        assert_eq!(ds.read_floats()?, vec![0.5, -1.5, 2.25]);
        Ok(())
    }

    #[test_log::test]
    fn test_resolves_attributes() -> TestResult {
        let (_fixture, container) = open_fixture(
            FixtureBuilder::default()
                .group("Measurement 1")
                .attr("temperature", FixtureAttr::Float(3.2))
                .attr("averages", FixtureAttr::Int(16))
                .attr("mode", FixtureAttr::Text("reflection".to_owned()))
                .attr("device", FixtureAttr::FixedText("TeraPulse 4000".to_owned()))
                .attr("broken", FixtureAttr::Compound),
        )?;

        let group = container.open_group("Measurement 1")?;
        let mut names = group.attribute_names()?;
        names.sort();
        assert_eq!(
            names,
            vec!["averages", "broken", "device", "mode", "temperature"]
        );

        assert_eq!(
            AttributeValue::resolve(&group, "temperature"),
            AttributeValue::Numeric(3.2)
        );
        assert_eq!(
            AttributeValue::resolve(&group, "averages"),
            AttributeValue::Numeric(16.0)
        );
        assert_eq!(
            AttributeValue::resolve(&group, "mode"),
            AttributeValue::Text("reflection".to_owned())
        );
        assert_eq!(
            AttributeValue::resolve(&group, "device"),
            AttributeValue::Text("TeraPulse 4000".to_owned())
        );
        assert_eq!(
            AttributeValue::resolve(&group, "broken"),
            AttributeValue::Unreadable
        );
        assert_eq!(
            AttributeValue::resolve(&group, "missing"),
            AttributeValue::Unreadable
        );
        Ok(())
    }

    #[test]
    fn test_open_missing_file_fails() {
        let res = Hdf5Opener.open(Path::new("/definitely/not/here.thz"));
        assert!(matches!(res, Err(ContainerError::Open { .. })));
    }

    #[test_log::test]
    fn test_open_missing_members_fails() -> TestResult {
        let (_fixture, container) = open_fixture(FixtureBuilder::default().group("Image"))?;

        assert!(container.open_group("Nope").is_err());
        let image = container.open_group("Image")?;
        assert!(image.open_dataset("nope").is_err());
        Ok(())
    }
}
