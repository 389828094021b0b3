use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatScraperError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Scraping error: {0}")]
    Scraping(String),

    #[error("can't get full size version of '{url}': {reason}")]
    FullSizeUrl { url: String, reason: String },

    #[error("collecting image urls: {0}")]
    Collecting(Box<CatScraperError>),

    #[error("downloading images: {0}")]
    Downloading(Box<CatScraperError>),

    #[error("creating destination directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("downloading image {url}: {source}")]
    ImageDownload {
        url: String,
        source: Box<CatScraperError>,
    },

    #[error("get: {0}")]
    Get(Box<CatScraperError>),

    #[error("unexpected status code '{0}' expected 200 OK")]
    UnexpectedStatus(u16),

    #[error("reading body: {0}")]
    ReadBody(Box<CatScraperError>),

    #[error("unexpected content type '{0}'")]
    UnknownContentType(String),

    #[error("saving: {0}")]
    Save(std::io::Error),

    #[error("invalid worker count {0}: must be at least 1")]
    InvalidWorkerCount(usize),

    #[error("download workers stopped after reporting {received} of {expected} outcomes")]
    WorkersGone { expected: usize, received: usize },
}

impl CatScraperError {
    pub fn scraping(msg: impl Into<String>) -> Self {
        Self::Scraping(msg.into())
    }

    pub fn full_size_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::FullSizeUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn collecting(err: CatScraperError) -> Self {
        Self::Collecting(Box::new(err))
    }

    pub fn downloading(err: CatScraperError) -> Self {
        Self::Downloading(Box::new(err))
    }

    pub fn image_download(url: impl Into<String>, err: CatScraperError) -> Self {
        Self::ImageDownload {
            url: url.into(),
            source: Box::new(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatScraperError>;
