use std::{fmt::Write as _, path::Path, time::SystemTime};

use byte_unit::{Byte, Unit, UnitType};
use chrono::{DateTime, Local};
use getset::Getters;

const UNKNOWN: &str = "Unknown";

/// File system details shown in the preview header, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct FileInfo {
    name: String,
    size: String,
    created: String,
    modified: String,
}

impl FileInfo {
    /// Never fails, anything that can't be read is shown as unknown
    pub fn read(path: &Path, date_format: &str) -> Self {
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let metadata = std::fs::metadata(path)
            .inspect_err(|e| log::debug!("No metadata for {}: {e}", path.display()))
            .ok();
        let size = metadata.as_ref().map_or(0, std::fs::Metadata::len);
        let created = metadata.as_ref().and_then(|m| m.created().ok());
        let modified = metadata.as_ref().and_then(|m| m.modified().ok());

        Self {
            name,
            size: format_size(size),
            created: format_timestamp(created, date_format),
            modified: format_timestamp(modified, date_format),
        }
    }
}

/// Human readable byte count in decimal units, e.g. `1.5 MB`
pub fn format_size(bytes: u64) -> String {
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Decimal);
    if adjusted.get_unit() == Unit::B {
        return format!("{bytes} bytes");
    }
    format!("{:.1} {}", adjusted.get_value(), adjusted.get_unit())
}

/// `Unknown` for a missing time, or if `date_format` can't be rendered
pub fn format_timestamp(time: Option<SystemTime>, date_format: &str) -> String {
    let Some(time) = time else {
        return UNKNOWN.to_owned();
    };
    let mut formatted = String::new();
    if let Err(e) = write!(
        formatted,
        "{}",
        DateTime::<Local>::from(time).format(date_format)
    ) {
        log::debug!("Failed formatting timestamp with '{date_format}': {e}");
        return UNKNOWN.to_owned();
    }
    formatted
}
