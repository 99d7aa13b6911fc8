use serde::Deserialize;

use crate::thumbnail::SizePreference;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub replay: ReplayConfig,
    #[serde(default)]
    pub thumbnails: ThumbnailConfig,
    #[serde(default)]
    pub charts: ChartsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayConfig {
    /// NDJSON capture to read; stdin when unset.
    pub input: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThumbnailConfig {
    #[serde(default = "default_prefer_larger")]
    pub prefer_larger: bool,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            prefer_larger: default_prefer_larger(),
        }
    }
}

impl ThumbnailConfig {
    pub fn preference(&self) -> SizePreference {
        SizePreference::from_prefer_larger(self.prefer_larger)
    }
}

fn default_prefer_larger() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartsConfig {
    /// Object name prefixes charted besides extruders (e.g. "temperature_sensor").
    #[serde(default = "default_sensor_prefixes")]
    pub sensor_prefixes: Vec<String>,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            sensor_prefixes: default_sensor_prefixes(),
        }
    }
}

pub fn default_sensor_prefixes() -> Vec<String> {
    [
        "heater_bed",
        "heater_generic",
        "temperature_sensor",
        "temperature_fan",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl AppConfig {
    /// Reads `CONFIG_FILE` (default `config.toml`). A missing default file means all defaults;
    /// a missing explicit `CONFIG_FILE` is an error.
    pub fn load() -> anyhow::Result<Self> {
        let explicit = std::env::var("CONFIG_FILE").ok();
        let path = explicit.clone().unwrap_or_else(|| "config.toml".into());
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if explicit.is_none() && e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::Error::new(e).context(format!("read config {}", path))),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Some(input) = &self.replay.input {
            anyhow::ensure!(
                !input.trim().is_empty(),
                "replay.input must be non-empty when set"
            );
        }
        anyhow::ensure!(
            !self.charts.sensor_prefixes.is_empty(),
            "charts.sensor_prefixes must list at least one prefix"
        );
        for prefix in &self.charts.sensor_prefixes {
            anyhow::ensure!(
                !prefix.is_empty() && !prefix.contains(char::is_whitespace),
                "charts.sensor_prefixes entries must be non-empty without whitespace, got {:?}",
                prefix
            );
        }
        Ok(())
    }
}
