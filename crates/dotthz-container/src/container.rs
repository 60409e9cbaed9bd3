use std::path::Path;

use crate::error::ContainerResult;

/// Opens containers for reading. One container is opened per preview request.
pub trait ContainerOpener {
    type Container: Container;

    /// Open the container at `path` read-only.
    ///
    /// The returned handle is released when it is dropped.
    fn open(&self, path: &Path) -> ContainerResult<Self::Container>;
}

impl<T: ContainerOpener + ?Sized> ContainerOpener for &T {
    type Container = T::Container;

    fn open(&self, path: &Path) -> ContainerResult<Self::Container> {
        (**self).open(path)
    }
}

/// An open, read-only hierarchical data store
pub trait Container {
    type Group: Group;

    /// Names of the top level groups, in the container's enumeration order.
    ///
    /// The order is whatever the backend yields and is not guaranteed to be stable.
    fn group_names(&self) -> ContainerResult<Vec<String>>;

    fn open_group(&self, name: &str) -> ContainerResult<Self::Group>;
}

/// A named node holding datasets and attributes
pub trait Group {
    type Dataset: Dataset;

    fn dataset_names(&self) -> ContainerResult<Vec<String>>;

    fn open_dataset(&self, name: &str) -> ContainerResult<Self::Dataset>;

    fn attribute_names(&self) -> ContainerResult<Vec<String>>;

    /// Read the attribute as a floating point scalar, failing if it isn't numeric
    fn read_numeric_attribute(&self, name: &str) -> ContainerResult<f64>;

    /// Read the attribute as a string, failing if it isn't a string type
    fn read_string_attribute(&self, name: &str) -> ContainerResult<String>;
}

/// A named multi-dimensional numeric array
pub trait Dataset {
    /// One entry per axis
    fn shape(&self) -> Vec<usize>;

    /// Read the whole dataset as single precision floats in row-major order
    fn read_floats(&self) -> ContainerResult<Vec<f32>>;
}
