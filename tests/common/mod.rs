// Shared test helpers

#![allow(dead_code)]

use printstate::models::*;
use printstate::state::PrinterState;

pub fn thumb(size: Option<u64>, data: Option<&str>) -> Thumbnail {
    Thumbnail {
        size,
        data: data.map(String::from),
        ..Default::default()
    }
}

pub fn file_with(thumbnails: Vec<Thumbnail>) -> FileMetadata {
    FileMetadata {
        filename: Some("benchy.gcode".into()),
        thumbnails: Some(thumbnails),
        ..Default::default()
    }
}

pub fn sensor(temperature: Option<f64>, target: Option<f64>) -> SensorConfig {
    SensorConfig {
        temperature,
        target,
        ..Default::default()
    }
}

pub fn printer_with(entries: &[(&str, SensorConfig)]) -> PrinterState {
    let mut state = PrinterState::new();
    for (key, config) in entries {
        state.printer.insert(key.to_string(), config.clone());
    }
    state
}
