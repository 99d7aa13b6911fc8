// Replay a captured NDJSON notification stream: decode, shape, emit NDJSON

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::chart::build_chart_entry;
use crate::change_info::normalize_change_info;
use crate::config::AppConfig;
use crate::models::{ChangeInfo, ChartEntry, Thumbnail};
use crate::notification::{Message, SensorFilter};
use crate::state::PrinterState;
use crate::thumbnail::{SizePreference, select_thumbnail};

/// One emitted line; serialized with a camelCase `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ReplayOutput {
    FileListChanged {
        change: ChangeInfo,
    },
    ChartEntry {
        key: String,
        entry: ChartEntry,
    },
    Thumbnail {
        filename: Option<String>,
        thumbnail: Option<Thumbnail>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Non-blank input lines.
    pub lines: u64,
    /// Output lines written.
    pub emitted: u64,
    /// Decoded lines that produced no output.
    pub skipped: u64,
    /// Lines that failed to decode.
    pub errors: u64,
}

/// Shapes one decoded message. Status readings are merged into `state` before
/// the chart entry is built, so a sensor's first update also seeds its config.
pub fn shape(
    message: Message,
    filter: &SensorFilter,
    preference: SizePreference,
    state: &mut PrinterState,
) -> Vec<ReplayOutput> {
    match message {
        Message::FileListChanged(change) => vec![ReplayOutput::FileListChanged {
            change: normalize_change_info(&change),
        }],
        Message::StatusUpdate(update) => {
            let mut out = Vec::new();
            for (key, reading) in update.sensor_readings(filter) {
                state.apply_reading(&key, &reading);
                match build_chart_entry(&key, &reading, &*state) {
                    Ok(entry) => out.push(ReplayOutput::ChartEntry { key, entry }),
                    Err(e) => tracing::warn!(key = %key, error = %e, "chart entry skipped"),
                }
            }
            out
        }
        Message::FileMetadata(metadata) => vec![ReplayOutput::Thumbnail {
            thumbnail: select_thumbnail(&metadata, preference),
            filename: metadata.filename,
        }],
        Message::Other { method } => {
            tracing::debug!(method = ?method, "ignoring message");
            Vec::new()
        }
    }
}

pub async fn run<R, W>(
    reader: R,
    mut writer: W,
    config: &AppConfig,
    state: &mut PrinterState,
) -> anyhow::Result<ReplayStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let filter = SensorFilter::from(&config.charts);
    let preference = config.thumbnails.preference();
    let mut stats = ReplayStats::default();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        stats.lines += 1;
        let message = match Message::from_json(&line) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(line = stats.lines, error = %e, "skipping undecodable line");
                stats.errors += 1;
                continue;
            }
        };

        let outputs = shape(message, &filter, preference, state);
        if outputs.is_empty() {
            stats.skipped += 1;
            continue;
        }
        for output in &outputs {
            let json = serde_json::to_string(output)?;
            writer.write_all(json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            stats.emitted += 1;
        }
    }
    writer.flush().await?;

    tracing::info!(
        lines = stats.lines,
        emitted = stats.emitted,
        skipped = stats.skipped,
        errors = stats.errors,
        sensors = state.len(),
        "Replay finished"
    );
    Ok(stats)
}
