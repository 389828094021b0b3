use crate::collector::UrlCollector;
use crate::error::{CatScraperError, Result};
use crate::pipeline::DownloadPipeline;
use crate::traits::{FileSystem, HttpGetter, PageScraper};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Collects gallery image URLs and downloads them.
pub struct Finder {
    collector: UrlCollector,
    pipeline: DownloadPipeline,
}

impl Finder {
    pub fn new(
        scraper: Arc<dyn PageScraper>,
        file_system: Arc<dyn FileSystem>,
        getter: Arc<dyn HttpGetter>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            collector: UrlCollector::new(scraper, base_url),
            pipeline: DownloadPipeline::new(getter, file_system),
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.pipeline = self.pipeline.with_progress(show_progress);
        self
    }

    /// Downloads the first `amount` unique gallery images into `images_dir`
    /// as `1.ext`, `2.ext`, ... using `threads` concurrent workers.
    ///
    /// A zero worker count is rejected before any gallery page is fetched.
    pub async fn collect_and_download_images(
        &self,
        amount: usize,
        threads: usize,
        images_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        if threads == 0 {
            return Err(CatScraperError::InvalidWorkerCount(threads));
        }

        let collection = self
            .collector
            .collect(amount)
            .await
            .map_err(CatScraperError::collecting)?;

        info!(
            "Collected {} unique image urls from {} pages ({} duplicates skipped)",
            collection.urls.len(),
            collection.pages_visited,
            collection.duplicates
        );
        info!("Downloading images");

        self.pipeline
            .download(&collection.urls[..amount], images_dir, threads)
            .await
            .map_err(CatScraperError::downloading)
    }
}
