use std::fmt::Write as _;

use dotthz_container::prelude::*;

use crate::diagnostics::Diagnostics;

/// Build a human readable report of every group, its datasets and its attributes.
///
/// Problems with single groups or attributes are written into the report instead of
/// aborting it, so every group and every attribute name shows up exactly once.
pub fn summarize<C: Container>(container: &C, diagnostics: Diagnostics<'_>) -> String {
    let mut report = String::new();

    let group_names = container.group_names().unwrap_or_else(|e| {
        diagnostics.warn(format_args!("Failed listing groups: {e}"));
        Vec::new()
    });
    if group_names.is_empty() {
        report.push_str("<no groups>\n");
        return report;
    }

    for group_name in group_names {
        let _ = writeln!(report, "Group: {group_name}");
        match container.open_group(&group_name) {
            Ok(group) => summarize_group(&mut report, &group, &group_name, diagnostics),
            Err(e) => {
                diagnostics.warn(format_args!("Failed to open group '{group_name}': {e}"));
                report.push_str("  ⚠ Failed to open group.\n");
            }
        }
        report.push('\n');
    }
    report
}

fn summarize_group<G: Group>(
    report: &mut String,
    group: &G,
    group_name: &str,
    diagnostics: Diagnostics<'_>,
) {
    report.push_str("  Datasets:\n");
    match group.dataset_names() {
        Ok(names) => {
            for name in names {
                let _ = writeln!(report, "    • {name}");
            }
        }
        Err(e) => {
            diagnostics.warn(format_args!(
                "Failed listing datasets of '{group_name}': {e}"
            ));
            report.push_str("    ⚠ Failed to list datasets.\n");
        }
    }

    report.push_str("  Attributes:\n");
    match group.attribute_names() {
        Ok(names) => {
            for name in names {
                let value = AttributeValue::resolve(group, &name);
                if !value.is_readable() {
                    diagnostics.debug(format_args!(
                        "Attribute '{name}' of '{group_name}' is neither numeric nor string"
                    ));
                }
                let _ = writeln!(report, "    - {name}: {value}");
            }
        }
        Err(e) => {
            diagnostics.warn(format_args!(
                "Failed listing attributes of '{group_name}': {e}"
            ));
            report.push_str("    ⚠ Failed to list attributes.\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotthz_test_util::{
        CaptureLog, MemoryAttr, MemoryContainer, MemoryDataset, MemoryGroup, MemoryOpener,
        TestResult,
    };
    use pretty_assertions::assert_eq;
    use std::path::Path;

    #[test]
    fn test_numeric_and_unreadable_attributes() -> TestResult {
        let opener = MemoryOpener::new(
            MemoryContainer::default().with_group(
                MemoryGroup::new("Measurement 1")
                    .attr("temperature", MemoryAttr::Numeric(3.2))
                    .attr("broken", MemoryAttr::Broken),
            ),
        );
        let container = opener.open(Path::new("scan.thz"))?;

        let report = summarize(&container, Diagnostics::silent());

        assert_eq!(report.matches("temperature").count(), 1);
        assert_eq!(report.matches("broken").count(), 1);
        assert!(report.contains("    - temperature: 3.2\n"));
        assert!(report.contains("    - broken: <error reading>\n"));
        Ok(())
    }

    #[test]
    fn test_full_report_layout() -> TestResult {
        let opener = MemoryOpener::new(
            MemoryContainer::default()
                .with_group(
                    MemoryGroup::new("Image")
                        .dataset(MemoryDataset::new("ds1", &[1, 1, 2], vec![0., 1.]))
                        .dataset(MemoryDataset::new("ds2", &[3], vec![0.; 3]))
                        .attr("mode", MemoryAttr::Text("transmission".to_owned()))
                        .attr("thickness", MemoryAttr::Numeric(0.5)),
                )
                .with_group(MemoryGroup::new("Locked").unopenable()),
        );
        let container = opener.open(Path::new("scan.thz"))?;

        let report = summarize(&container, Diagnostics::silent());

        let expected = "\
Group: Image
  Datasets:
    • ds1
    • ds2
  Attributes:
    - mode: transmission
    - thickness: 0.5

Group: Locked
  ⚠ Failed to open group.

";
        assert_eq!(report, expected);
        Ok(())
    }

    #[test]
    fn test_failed_group_is_reported_and_logged() -> TestResult {
        let opener = MemoryOpener::new(
            MemoryContainer::default()
                .with_group(MemoryGroup::new("Locked").unopenable())
                .with_group(MemoryGroup::new("Open").attr("n", MemoryAttr::Numeric(1.0))),
        );
        let container = opener.open(Path::new("scan.thz"))?;
        let capture = CaptureLog::default();

        let report = summarize(&container, Diagnostics::new(&capture));

        assert!(report.contains("Group: Locked\n  ⚠ Failed to open group.\n"));
        assert!(report.contains("    - n: 1\n"));
        assert_eq!(capture.warnings().len(), 1);
        assert!(capture.contains("Locked"));
        Ok(())
    }

    #[test]
    fn test_no_groups() -> TestResult {
        let opener = MemoryOpener::new(MemoryContainer::default());
        let container = opener.open(Path::new("scan.thz"))?;
        assert_eq!(summarize(&container, Diagnostics::silent()), "<no groups>\n");

        let opener = MemoryOpener::new(MemoryContainer::default().listing_fails());
        let container = opener.open(Path::new("scan.thz"))?;
        assert_eq!(summarize(&container, Diagnostics::silent()), "<no groups>\n");
        Ok(())
    }
}
