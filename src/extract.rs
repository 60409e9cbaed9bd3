use dotthz_container::prelude::*;
use dotthz_thumbnail::CubeShape;

use crate::{diagnostics::Diagnostics, error::PreviewError};

/// The samples of the dataset picked for imaging
#[derive(Debug, Clone, PartialEq)]
pub struct RawCube {
    pub group: String,
    pub dataset: String,
    pub shape: CubeShape,
    /// Row-major, channels varying fastest
    pub samples: Vec<f32>,
}

/// Find the first dataset with exactly 3 axes and read it.
///
/// Groups are walked in the container's enumeration order and datasets in each group's order.
/// The first match is used even if reading it fails, later datasets are never considered.
pub fn find_imagable_dataset<C: Container>(
    container: &C,
    diagnostics: Diagnostics<'_>,
) -> Result<RawCube, PreviewError> {
    let group_names = container.group_names().map_err(|e| {
        diagnostics.warn(format_args!("Failed listing groups: {e}"));
        PreviewError::NoImagableDataset
    })?;

    for group_name in group_names {
        diagnostics.debug(format_args!("Found group: {group_name}"));
        let group = match container.open_group(&group_name) {
            Ok(group) => group,
            Err(e) => {
                diagnostics.debug(format_args!("Skipping group '{group_name}': {e}"));
                continue;
            }
        };
        let dataset_names = match group.dataset_names() {
            Ok(names) => names,
            Err(e) => {
                diagnostics.debug(format_args!("Skipping group '{group_name}': {e}"));
                continue;
            }
        };

        for dataset_name in dataset_names {
            let dataset = match group.open_dataset(&dataset_name) {
                Ok(dataset) => dataset,
                Err(e) => {
                    diagnostics.debug(format_args!("Skipping dataset '{dataset_name}': {e}"));
                    continue;
                }
            };
            let dims = dataset.shape();
            diagnostics.debug(format_args!(
                "Dataset '{dataset_name}' has dimensionality {dims:?}"
            ));
            let Some(shape) = CubeShape::from_dims(&dims) else {
                continue;
            };

            diagnostics.info(format_args!(
                "Using dataset '{group_name}/{dataset_name}' with dims {dims:?}"
            ));
            let samples = read_samples(&dataset, &dataset_name, shape)?;
            return Ok(RawCube {
                group: group_name,
                dataset: dataset_name,
                shape,
                samples,
            });
        }
    }

    Err(PreviewError::NoImagableDataset)
}

fn read_samples<D: Dataset>(
    dataset: &D,
    name: &str,
    shape: CubeShape,
) -> Result<Vec<f32>, PreviewError> {
    let read_failed = |reason: String| PreviewError::DatasetReadFailed {
        dataset: name.to_owned(),
        reason,
    };
    let samples = dataset.read_floats().map_err(|e| read_failed(e.to_string()))?;
    if shape.element_count() != Some(samples.len()) {
        return Err(read_failed(format!(
            "expected {:?} elements for shape {dims:?}, got {}",
            shape.element_count(),
            samples.len(),
            dims = [shape.width, shape.height, shape.channels],
        )));
    }
    Ok(samples)
}
