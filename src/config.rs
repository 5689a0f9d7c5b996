use pokedex::Session;

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: String,
    pub output: Option<PathBuf>,
    /// Request timeout in seconds. Requests never time out if unset.
    pub timeout: Option<u64>,
}

impl Config {
    pub async fn load() -> Result<Self, anywho::Error> {
        let path = config_path();

        let mut config = if fs::try_exists(&path).await? {
            log::info!("Loading configuration: {}", path.display());

            Self::parse(&fs::read_to_string(&path).await?)?
        } else {
            Self::default()
        };

        if let Ok(api) = env::var("DEXROLL_API") {
            config.api = api;
        }

        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    pub fn output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| data_dir().join("index.html"))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Session::API.to_owned(),
            output: None,
            timeout: None,
        }
    }
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join(env!("CARGO_PKG_NAME"))
        .join("config.ron")
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_default()
        .join(env!("CARGO_PKG_NAME"))
}
