// Last-known printer object state, keyed by object name

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chart::SensorLookup;
use crate::models::{SensorConfig, SensorReadingUpdate};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrinterState {
    #[serde(default)]
    pub printer: BTreeMap<String, SensorConfig>,
}

impl PrinterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges the fields present in `reading`; inserts the key if unseen.
    pub fn apply_reading(&mut self, key: &str, reading: &SensorReadingUpdate) {
        let entry = self.printer.entry(key.to_string()).or_default();
        if let Some(t) = reading.temperature {
            entry.temperature = Some(t);
        }
        if let Some(t) = reading.target {
            entry.target = Some(t);
        }
    }

    pub fn len(&self) -> usize {
        self.printer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.printer.is_empty()
    }
}

impl SensorLookup for PrinterState {
    fn sensor(&self, key: &str) -> Option<&SensorConfig> {
        self.printer.get(key)
    }
}
