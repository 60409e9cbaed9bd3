use std::fmt;

use log::{Level, Log, Metadata, Record};

/// Target of every record emitted by the preview pipeline
pub const TARGET: &str = "dotthz_preview";

/// Where the preview pipeline sends its diagnostics.
///
/// Wraps any [`log::Log`], so the host decides whether traces end up in its own logger,
/// the global one, or nowhere.
#[derive(Clone, Copy)]
pub struct Diagnostics<'a> {
    sink: &'a dyn Log,
}

impl Diagnostics<'static> {
    /// Forward to whatever global logger is installed, e.g. `env_logger`
    pub fn global() -> Self {
        Self {
            sink: log::logger(),
        }
    }

    pub fn silent() -> Self {
        Self { sink: &SILENT }
    }
}

impl<'a> Diagnostics<'a> {
    pub fn new(sink: &'a dyn Log) -> Self {
        Self { sink }
    }

    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        let metadata = Metadata::builder().level(level).target(TARGET).build();
        if !self.sink.enabled(&metadata) {
            return;
        }
        self.sink.log(
            &Record::builder()
                .metadata(metadata)
                .args(args)
                .module_path_static(Some(module_path!()))
                .build(),
        );
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }
}

impl fmt::Debug for Diagnostics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

struct Silent;

impl Log for Silent {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        false
    }

    fn log(&self, _record: &Record<'_>) {}

    fn flush(&self) {}
}

static SILENT: Silent = Silent;

#[cfg(test)]
mod tests {
    use super::*;
    use dotthz_test_util::CaptureLog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_records_reach_the_sink() {
        let capture = CaptureLog::default();
        let diagnostics = Diagnostics::new(&capture);
        diagnostics.warn(format_args!("Falling back: {}", 42));
        diagnostics.debug(format_args!("detail"));

        assert_eq!(
            capture.records(),
            vec![
                (Level::Warn, "Falling back: 42".to_owned()),
                (Level::Debug, "detail".to_owned())
            ]
        );
    }

    #[test]
    fn test_silent_drops_everything() {
        // Nothing to observe, but it must not panic or touch the global logger
        Diagnostics::silent().warn(format_args!("ignored"));
    }
}
