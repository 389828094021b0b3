use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `CATSCRAPER__DOWNLOAD__THREADS=3`.
const ENV_PREFIX: &str = "CATSCRAPER";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub download: DownloadConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub base_url: String,
    pub user_agent: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    /// Exact `class` attribute values that mark an `img` as gallery content.
    pub image_classes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub amount: usize,
    pub threads: usize,
    pub output_dir: PathBuf,
    pub progress: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
}

impl Config {
    /// Loads the optional TOML file at `path`, then applies environment overrides.
    /// A missing file is not an error; every field falls back to its default.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Applies command line overrides on top of the loaded values.
    pub fn with_overrides(mut self, amount: Option<usize>, threads: Option<usize>) -> Self {
        if let Some(amount) = amount {
            self.download.amount = amount;
        }
        if let Some(threads) = threads {
            self.download.threads = threads;
        }
        self
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://icanhas.cheezburger.com/".to_string(),
            user_agent: None,
            headers: None,
            image_classes: vec![
                "resp-media".to_string(),
                "resp-media lazyload".to_string(),
            ],
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            amount: 10,
            threads: 1,
            output_dir: PathBuf::from("images/"),
            progress: true,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: "CatScraper/1.0 (Meme Gallery Downloader)".to_string(),
        }
    }
}
