use anyhow::{Context, Result};
use printstate::*;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

/// Stamps stderr log lines with local wall-clock time; stdout carries only NDJSON.
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries NDJSON output; logs go to stderr
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app_config = config::AppConfig::load()?;
    tracing::info!("{} {} starting", version::NAME, version::VERSION);

    let mut state = state::PrinterState::new();
    let stdout = tokio::io::stdout();
    match &app_config.replay.input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("open replay input {}", path))?;
            tracing::info!("Replaying {}", path);
            replay::run(BufReader::new(file), stdout, &app_config, &mut state).await?;
        }
        None => {
            tracing::info!("Replaying stdin");
            replay::run(
                BufReader::new(tokio::io::stdin()),
                stdout,
                &app_config,
                &mut state,
            )
            .await?;
        }
    }

    Ok(())
}
