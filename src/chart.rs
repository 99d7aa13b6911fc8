// Chart entries for temperature sensors: one timestamp, temperature + optional target series

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use crate::models::{ChartEntry, ChartSeries, SensorConfig, SensorReadingUpdate};

const TARGET_LABEL_SUFFIX: &str = "Target";

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Config must be seeded before the first update for a key.
    #[error("no sensor config for key '{0}'")]
    UnknownSensor(String),
}

/// Read-only access to last-known sensor config by key.
pub trait SensorLookup {
    fn sensor(&self, key: &str) -> Option<&SensorConfig>;
}

impl SensorLookup for HashMap<String, SensorConfig> {
    fn sensor(&self, key: &str) -> Option<&SensorConfig> {
        self.get(key)
    }
}

impl SensorLookup for BTreeMap<String, SensorConfig> {
    fn sensor(&self, key: &str) -> Option<&SensorConfig> {
        self.get(key)
    }
}

/// Display label for a sensor key: compound keys ("temperature_sensor chamber") use the name part.
pub fn sensor_label(key: &str) -> &str {
    if key.contains(' ') {
        key.split(' ').nth(1).unwrap_or(key)
    } else {
        key
    }
}

pub fn build_chart_entry<L: SensorLookup + ?Sized>(
    key: &str,
    update: &SensorReadingUpdate,
    lookup: &L,
) -> Result<ChartEntry, ChartError> {
    build_chart_entry_at(key, update, lookup, Utc::now())
}

/// Same as [`build_chart_entry`] with an explicit timestamp for both series.
///
/// Missing values in `update` fall back to the stored config, so the temperature
/// series keeps ticking even when only the target changed.
pub fn build_chart_entry_at<L: SensorLookup + ?Sized>(
    key: &str,
    update: &SensorReadingUpdate,
    lookup: &L,
    now: DateTime<Utc>,
) -> Result<ChartEntry, ChartError> {
    let config = lookup
        .sensor(key)
        .ok_or_else(|| ChartError::UnknownSensor(key.to_string()))?;
    let label = sensor_label(key);

    let temperature = update.temperature.or(config.temperature);
    let mut entry = ChartEntry {
        temperature: Some(ChartSeries::single(label, now, temperature)),
        target: None,
    };

    if let Some(target) = update.target.or(config.target) {
        entry.target = Some(ChartSeries::single(
            format!("{label}{TARGET_LABEL_SUFFIX}"),
            now,
            Some(target),
        ));
    }

    Ok(entry)
}
