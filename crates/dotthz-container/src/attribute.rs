use derive_more::Display;

use crate::container::Group;

/// The resolved value of a group attribute
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AttributeValue {
    #[display("{_0}")]
    Numeric(f64),
    #[display("{_0}")]
    Text(String),
    /// Neither numeric nor string
    #[display("<error reading>")]
    Unreadable,
}

impl AttributeValue {
    /// Resolve an attribute by trying a numeric read, then a string read.
    ///
    /// Never fails, an attribute that can't be read either way is [`AttributeValue::Unreadable`].
    pub fn resolve<G: Group>(group: &G, name: &str) -> Self {
        if let Ok(value) = group.read_numeric_attribute(name) {
            return Self::Numeric(value);
        }
        match group.read_string_attribute(name) {
            Ok(value) => Self::Text(value),
            Err(_) => Self::Unreadable,
        }
    }

    pub fn is_readable(&self) -> bool {
        !matches!(self, Self::Unreadable)
    }
}
