use crate::error::Result;
use std::path::{Path, PathBuf};

/// 1-based position in the paginated gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef(u32);

impl PageRef {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Page 1 is the gallery root itself; later pages live under `/page/{n}`.
    pub fn target(&self, base_url: &str) -> String {
        if self.0 == 1 {
            base_url.to_string()
        } else {
            format!("{}/page/{}", base_url.trim_end_matches('/'), self.0)
        }
    }
}

/// Unique image URLs in first-seen order, plus what it took to gather them.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub urls: Vec<String>,
    pub pages_visited: u32,
    pub duplicates: usize,
}

#[derive(Debug, Clone)]
pub struct DownloadJob {
    pub index: usize,
    pub url: String,
    /// Destination without extension; the extension comes from the response.
    pub path: PathBuf,
}

impl DownloadJob {
    pub fn new(index: usize, url: String, base_path: &Path) -> Self {
        Self {
            index,
            url,
            path: base_path.join(index.to_string()),
        }
    }

    pub fn destination(&self, extension: &str) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(extension);
        PathBuf::from(name)
    }
}

/// Result of one job: the written file, or a failure tagged with the job's URL.
#[derive(Debug)]
pub struct DownloadOutcome {
    pub index: usize,
    pub result: Result<PathBuf>,
}
