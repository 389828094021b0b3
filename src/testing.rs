//! In-memory doubles for the scraper, HTTP and storage capabilities.

use crate::error::{CatScraperError, Result};
use crate::traits::{FileSystem, HttpGetter, HttpResponse, PageScraper};
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub struct MockScraper {
    pub urls_by_page: HashMap<String, Vec<String>>,
    pub error: Option<String>,
    requested: Mutex<Vec<String>>,
}

impl MockScraper {
    pub fn with_pages(pages: Vec<(&str, Vec<&str>)>) -> Self {
        let urls_by_page = pages
            .into_iter()
            .map(|(page, urls)| {
                (
                    page.to_string(),
                    urls.iter().map(|url| url.to_string()).collect(),
                )
            })
            .collect();
        Self {
            urls_by_page,
            ..Self::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            error: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn requested_pages(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PageScraper for MockScraper {
    async fn collect_image_urls(&self, page_url: &str) -> Result<Vec<String>> {
        self.requested.lock().unwrap().push(page_url.to_string());

        if let Some(msg) = &self.error {
            return Err(CatScraperError::scraping(msg.clone()));
        }

        self.urls_by_page
            .get(page_url)
            .cloned()
            .ok_or_else(|| CatScraperError::scraping(format!("url '{}' not found", page_url)))
    }
}

#[derive(Clone)]
pub struct StaticResponse {
    pub content: Vec<u8>,
    pub content_type: String,
    pub status: u16,
    pub body_error: Option<String>,
    pub delay: Duration,
}

impl StaticResponse {
    pub fn ok(content: &[u8], content_type: &str) -> Self {
        Self {
            content: content.to_vec(),
            content_type: content_type.to_string(),
            status: 200,
            body_error: None,
            delay: Duration::ZERO,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_delay(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }

    pub fn with_body_error(mut self, msg: &str) -> Self {
        self.body_error = Some(msg.to_string());
        self
    }
}

#[async_trait::async_trait]
impl HttpResponse for StaticResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn content_type(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.content_type))
    }

    async fn read_body(&mut self) -> Result<Vec<u8>> {
        match &self.body_error {
            Some(msg) => Err(CatScraperError::scraping(msg.clone())),
            None => Ok(self.content.clone()),
        }
    }
}

#[derive(Default)]
pub struct StaticGetter {
    pub responses: HashMap<String, StaticResponse>,
    pub error: Option<String>,
    calls: AtomicUsize,
}

impl StaticGetter {
    pub fn with_responses(responses: Vec<(&str, StaticResponse)>) -> Self {
        Self {
            responses: responses
                .into_iter()
                .map(|(url, response)| (url.to_string(), response))
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            error: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl HttpGetter for StaticGetter {
    async fn get(&self, url: &str) -> Result<Box<dyn HttpResponse>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(msg) = &self.error {
            return Err(CatScraperError::scraping(msg.clone()));
        }

        let response = self
            .responses
            .get(url)
            .cloned()
            .ok_or_else(|| CatScraperError::scraping(format!("url '{}' not found", url)))?;

        if !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }

        Ok(Box::new(response))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct WrittenFile {
    pub name: PathBuf,
    pub content: Vec<u8>,
}

impl WrittenFile {
    pub fn new(name: &str, content: &[u8]) -> Self {
        Self {
            name: PathBuf::from(name),
            content: content.to_vec(),
        }
    }
}

#[derive(Default)]
pub struct MockFileSystem {
    pub write_error: Option<String>,
    pub mkdir_error: Option<String>,
    written: Mutex<Vec<WrittenFile>>,
    created_dirs: Mutex<Vec<PathBuf>>,
}

impl MockFileSystem {
    pub fn failing_mkdir(msg: &str) -> Self {
        Self {
            mkdir_error: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_write(msg: &str) -> Self {
        Self {
            write_error: Some(msg.to_string()),
            ..Self::default()
        }
    }

    /// Written files sorted by name; workers may write in any order.
    pub fn written_files(&self) -> Vec<WrittenFile> {
        let mut files = self.written.lock().unwrap().clone();
        files.sort();
        files
    }

    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.created_dirs.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl FileSystem for MockFileSystem {
    async fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        if let Some(msg) = &self.mkdir_error {
            return Err(std::io::Error::other(msg.clone()));
        }
        self.created_dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        if let Some(msg) = &self.write_error {
            return Err(std::io::Error::other(msg.clone()));
        }
        self.written.lock().unwrap().push(WrittenFile {
            name: path.to_path_buf(),
            content: data.to_vec(),
        });
        Ok(())
    }
}
