pub mod attribute;
pub mod container;
pub mod error;

pub mod prelude {
    pub use crate::attribute::AttributeValue;
    pub use crate::container::{Container, ContainerOpener, Dataset, Group};
    pub use crate::error::{ContainerError, ContainerResult};
}
