use bookhive::QueryConfiguration;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG: &str = "bookhive.toml";

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub config_path: PathBuf,
    pub file: ConfigFile,
}

impl ProjectConfig {
    pub fn load(config_path: PathBuf) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(&config_path).map_err(|e| {
            anyhow::anyhow!(
                "failed to read config file {}: {e}",
                config_path.display()
            )
        })?;

        let file = ConfigFile::parse(&raw).map_err(|e| {
            anyhow::anyhow!(
                "failed to load config file {}: {e:#}",
                config_path.display()
            )
        })?;

        tracing::debug!(path = %config_path.display(), "loaded config");

        Ok(Self { config_path, file })
    }

    /// Load `explicit` when given, else the default file if it exists.
    ///
    /// An explicit path that is missing is an error; a missing default file
    /// just means built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Option<Self>> {
        match explicit {
            Some(path) => Self::load(path.to_path_buf()).map(Some),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG);
                if path.exists() {
                    Self::load(path).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub query: QueryConfiguration,

    #[serde(default)]
    pub backend: BackendConfig,
}

fn default_version() -> String {
    "1".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    bookhive::DEFAULT_DELAY.as_millis() as u64
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl BackendConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl ConfigFile {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.version.trim() != "1" {
            anyhow::bail!("unsupported config version: {}", self.version);
        }
        if self.query.kind.uses_limit() && self.query.limit == 0 {
            anyhow::bail!("query.limit must be at least 1");
        }
        Ok(())
    }
}
