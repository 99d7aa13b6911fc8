// Time-series chart shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: DateTime<Utc>,
    /// `None` (JSON null) renders as a gap.
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn single(label: impl Into<String>, x: DateTime<Utc>, y: Option<f64>) -> Self {
        Self {
            label: label.into(),
            data: vec![ChartPoint { x, y }],
        }
    }
}

/// Points for one sensor update: the temperature series and, when known, the target series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<ChartSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ChartSeries>,
}
