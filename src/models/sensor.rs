// Heater / temperature sensor readings and last-known config

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Partial reading from a status update; either field may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorReadingUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
}

impl SensorReadingUpdate {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.target.is_none()
    }
}

/// Last-known state of one sensor object. Fields other than temperature/target
/// (power, speed, ...) are carried in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
