// Decode one NDJSON line (JSON-RPC notification or metadata response) into a typed Message

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::config::{ChartsConfig, default_sensor_prefixes};
use crate::models::{ChangeNotification, FileMetadata, SensorReadingUpdate};

pub const METHOD_FILELIST_CHANGED: &str = "notify_filelist_changed";
pub const METHOD_STATUS_UPDATE: &str = "notify_status_update";

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{method}: missing params[0]")]
    MissingParams { method: String },
    #[error("{method}: params do not match expected shape: {source}")]
    InvalidParams {
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    params: Option<Vec<Value>>,
    #[serde(default)]
    result: Option<Value>,
}

/// Object name -> raw status fields, as pushed by `notify_status_update`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusUpdate {
    pub objects: BTreeMap<String, Value>,
    pub eventtime: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    FileListChanged(ChangeNotification),
    StatusUpdate(StatusUpdate),
    FileMetadata(FileMetadata),
    Other { method: Option<String> },
}

impl Message {
    pub fn from_json(line: &str) -> Result<Self, NotificationError> {
        let envelope: Envelope = serde_json::from_str(line)?;
        match envelope.method {
            Some(method) => Self::from_notification(method, envelope.params.unwrap_or_default()),
            None => Self::from_result(envelope.result),
        }
    }

    fn from_notification(method: String, params: Vec<Value>) -> Result<Self, NotificationError> {
        if method != METHOD_FILELIST_CHANGED && method != METHOD_STATUS_UPDATE {
            return Ok(Message::Other {
                method: Some(method),
            });
        }
        let mut params = params.into_iter();
        let Some(first) = params.next() else {
            return Err(NotificationError::MissingParams { method });
        };

        if method == METHOD_FILELIST_CHANGED {
            let change = serde_json::from_value(first)
                .map_err(|source| NotificationError::InvalidParams { method, source })?;
            return Ok(Message::FileListChanged(change));
        }

        let objects = serde_json::from_value(first)
            .map_err(|source| NotificationError::InvalidParams { method, source })?;
        let eventtime = params.next().and_then(|v| v.as_f64());
        Ok(Message::StatusUpdate(StatusUpdate { objects, eventtime }))
    }

    fn from_result(result: Option<Value>) -> Result<Self, NotificationError> {
        match result {
            Some(result @ Value::Object(_)) if result.get("thumbnails").is_some() => {
                let metadata = serde_json::from_value(result).map_err(|source| {
                    NotificationError::InvalidParams {
                        method: "result".into(),
                        source,
                    }
                })?;
                Ok(Message::FileMetadata(metadata))
            }
            _ => Ok(Message::Other { method: None }),
        }
    }
}

/// Decides which printer objects are temperature sensors worth charting.
#[derive(Debug, Clone)]
pub struct SensorFilter {
    prefixes: Vec<String>,
}

impl Default for SensorFilter {
    fn default() -> Self {
        Self {
            prefixes: default_sensor_prefixes(),
        }
    }
}

impl From<&ChartsConfig> for SensorFilter {
    fn from(config: &ChartsConfig) -> Self {
        Self {
            prefixes: config.sensor_prefixes.clone(),
        }
    }
}

impl SensorFilter {
    /// `extruder`, `extruderN`, a bare prefix, or `"<prefix> <name>"`.
    pub fn is_chartable(&self, key: &str) -> bool {
        if let Some(rest) = key.strip_prefix("extruder")
            && rest.chars().all(|c| c.is_ascii_digit())
        {
            return true;
        }
        self.prefixes.iter().any(|p| {
            key.strip_prefix(p.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(' '))
        })
    }
}

impl StatusUpdate {
    /// Readings for chartable objects carrying a temperature and/or target, sorted by key.
    pub fn sensor_readings(&self, filter: &SensorFilter) -> Vec<(String, SensorReadingUpdate)> {
        self.objects
            .iter()
            .filter(|(key, _)| filter.is_chartable(key))
            .filter_map(|(key, value)| {
                match SensorReadingUpdate::deserialize(value) {
                    Ok(reading) if !reading.is_empty() => Some((key.clone(), reading)),
                    Ok(_) => None,
                    Err(e) => {
                        tracing::debug!(key = %key, error = %e, "status object is not a sensor reading");
                        None
                    }
                }
            })
            .collect()
    }
}
