//! An in-memory container for injecting failures the HDF5 library can't easily produce

use std::{
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use dotthz_container::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum MemoryAttr {
    Numeric(f64),
    Text(String),
    Broken,
}

#[derive(Debug, Clone)]
pub struct MemoryDataset {
    name: String,
    shape: Vec<usize>,
    /// `None` makes every read fail
    samples: Option<Vec<f32>>,
}

impl MemoryDataset {
    pub fn new(name: impl Into<String>, shape: &[usize], samples: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            shape: shape.to_vec(),
            samples: Some(samples),
        }
    }

    /// A dataset with the given shape where every read fails
    pub fn unreadable(name: impl Into<String>, shape: &[usize]) -> Self {
        Self {
            name: name.into(),
            shape: shape.to_vec(),
            samples: None,
        }
    }
}

impl Dataset for MemoryDataset {
    fn shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    fn read_floats(&self) -> ContainerResult<Vec<f32>> {
        self.samples
            .clone()
            .ok_or_else(|| ContainerError::read(&self.name, "injected read failure"))
    }
}

#[derive(Debug, Clone)]
pub struct MemoryGroup {
    name: String,
    openable: bool,
    datasets: Vec<MemoryDataset>,
    attrs: Vec<(String, MemoryAttr)>,
}

impl MemoryGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            openable: true,
            datasets: Vec::new(),
            attrs: Vec::new(),
        }
    }

    /// Listed by the container but fails to open
    pub fn unopenable(mut self) -> Self {
        self.openable = false;
        self
    }

    pub fn dataset(mut self, dataset: MemoryDataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: MemoryAttr) -> Self {
        self.attrs.push((name.into(), value));
        self
    }

    fn find_attr(&self, name: &str) -> ContainerResult<&MemoryAttr> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value)
            .ok_or_else(|| ContainerError::NotFound(name.to_owned()))
    }
}

impl Group for MemoryGroup {
    type Dataset = MemoryDataset;

    fn dataset_names(&self) -> ContainerResult<Vec<String>> {
        Ok(self.datasets.iter().map(|ds| ds.name.clone()).collect())
    }

    fn open_dataset(&self, name: &str) -> ContainerResult<Self::Dataset> {
        self.datasets
            .iter()
            .find(|ds| ds.name == name)
            .cloned()
            .ok_or_else(|| ContainerError::NotFound(name.to_owned()))
    }

    fn attribute_names(&self) -> ContainerResult<Vec<String>> {
        Ok(self.attrs.iter().map(|(name, _)| name.clone()).collect())
    }

    fn read_numeric_attribute(&self, name: &str) -> ContainerResult<f64> {
        match self.find_attr(name)? {
            MemoryAttr::Numeric(value) => Ok(*value),
            MemoryAttr::Text(_) | MemoryAttr::Broken => {
                Err(ContainerError::read(name, "not a numeric attribute"))
            }
        }
    }

    fn read_string_attribute(&self, name: &str) -> ContainerResult<String> {
        match self.find_attr(name)? {
            MemoryAttr::Text(value) => Ok(value.clone()),
            MemoryAttr::Numeric(_) | MemoryAttr::Broken => {
                Err(ContainerError::read(name, "not a string attribute"))
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    groups: Vec<MemoryGroup>,
    listing_fails: bool,
}

impl MemoryContainer {
    pub fn with_group(mut self, group: MemoryGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Make listing the groups fail
    pub fn listing_fails(mut self) -> Self {
        self.listing_fails = true;
        self
    }
}

/// An open [`MemoryContainer`], counted by its [`MemoryOpener`] until dropped
#[derive(Debug)]
pub struct MemoryHandle {
    container: MemoryContainer,
    open_handles: Arc<AtomicUsize>,
}

impl Drop for MemoryHandle {
    fn drop(&mut self) {
        self.open_handles.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Container for MemoryHandle {
    type Group = MemoryGroup;

    fn group_names(&self) -> ContainerResult<Vec<String>> {
        if self.container.listing_fails {
            return Err(ContainerError::read("/", "injected listing failure"));
        }
        Ok(self
            .container
            .groups
            .iter()
            .map(|g| g.name.clone())
            .collect())
    }

    fn open_group(&self, name: &str) -> ContainerResult<Self::Group> {
        let group = self
            .container
            .groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| ContainerError::NotFound(name.to_owned()))?;
        if !group.openable {
            return Err(ContainerError::read(name, "injected open failure"));
        }
        Ok(group.clone())
    }
}

/// Hands out the same in-memory container for any path, or fails every open if there is none
#[derive(Debug, Default)]
pub struct MemoryOpener {
    container: Option<MemoryContainer>,
    opened: AtomicUsize,
    open_handles: Arc<AtomicUsize>,
}

impl MemoryOpener {
    pub fn new(container: MemoryContainer) -> Self {
        Self {
            container: Some(container),
            ..Default::default()
        }
    }

    /// An opener where every open fails
    pub fn failing() -> Self {
        Self::default()
    }

    /// How many times a container was opened
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// How many opened containers haven't been dropped yet
    pub fn open_handles(&self) -> usize {
        self.open_handles.load(Ordering::SeqCst)
    }
}

impl ContainerOpener for MemoryOpener {
    type Container = MemoryHandle;

    fn open(&self, path: &Path) -> ContainerResult<Self::Container> {
        let Some(container) = self.container.clone() else {
            return Err(ContainerError::open(path, "injected open failure"));
        };
        self.opened.fetch_add(1, Ordering::SeqCst);
        self.open_handles.fetch_add(1, Ordering::SeqCst);
        Ok(MemoryHandle {
            container,
            open_handles: Arc::clone(&self.open_handles),
        })
    }
}
