use hdf5::{
    Attribute, Location,
    types::{FixedAscii, FixedUnicode, TypeDescriptor, VarLenAscii, VarLenUnicode},
};

/// Longest fixed-length string kept in full, HDF5 truncates anything longer on conversion
const FIXED_STRING_CAPACITY: usize = 1024;

/// Read a string attribute of any HDF5 string type.
///
/// Fixed-length values are converted by HDF5 into a fixed buffer of our own, arrays of
/// strings are joined with `, `.
pub(crate) fn read_string_attribute(attr: &Attribute) -> hdf5::Result<String> {
    match attr.dtype()?.to_descriptor()? {
        TypeDescriptor::VarLenAscii => Ok(attr.read_scalar::<VarLenAscii>()?.as_str().to_owned()),
        TypeDescriptor::VarLenUnicode => {
            Ok(attr.read_scalar::<VarLenUnicode>()?.as_str().to_owned())
        }
        TypeDescriptor::FixedAscii(_) => {
            let values = attr.read_raw::<FixedAscii<FIXED_STRING_CAPACITY>>()?;
            Ok(join_strings(values.iter().map(FixedAscii::as_str)))
        }
        TypeDescriptor::FixedUnicode(_) => {
            let values = attr.read_raw::<FixedUnicode<FIXED_STRING_CAPACITY>>()?;
            Ok(join_strings(values.iter().map(FixedUnicode::as_str)))
        }
        other => Err(hdf5::Error::from(format!(
            "Attribute is not a string type: {other}"
        ))),
    }
}

fn join_strings<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|v| v.trim_end_matches('\0'))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reads an HDF5 attribute's value as a 64-bit float.
///
/// Integer and float types of any width are converted. Besides scalars, single element
/// arrays are accepted since some writers store every attribute as an array.
pub(crate) fn read_numeric_attribute(attr: &Attribute) -> hdf5::Result<f64> {
    let type_descriptor = attr.dtype()?.to_descriptor()?;
    match type_descriptor {
        TypeDescriptor::Integer(_) | TypeDescriptor::Unsigned(_) | TypeDescriptor::Float(_) => {
            if attr.is_scalar() {
                return attr.read_scalar::<f64>();
            }
            match attr.read_raw::<f64>()?.as_slice() {
                [value] => Ok(*value),
                values => Err(hdf5::Error::from(format!(
                    "Expected a single numeric value, got {}",
                    values.len()
                ))),
            }
        }
        other => Err(hdf5::Error::from(format!(
            "Attribute is not a numeric type: {other}"
        ))),
    }
}

/// The last path component of an HDF5 object, e.g. `ds1` for `/Measurement 1/ds1`
pub(crate) fn member_name(location: &Location) -> String {
    let path = location.name();
    path.rsplit('/').next().unwrap_or_default().to_owned()
}
