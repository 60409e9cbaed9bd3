use std::sync::Mutex;

use log::{Level, Log, Metadata, Record};

/// A logger that keeps every record so tests can check which degraded paths were taken
#[derive(Debug, Default)]
pub struct CaptureLog {
    records: Mutex<Vec<(Level, String)>>,
}

impl CaptureLog {
    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().expect("poisoned capture log").clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, msg)| msg)
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.records().iter().any(|(_, msg)| msg.contains(needle))
    }
}

impl Log for CaptureLog {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .expect("poisoned capture log")
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
