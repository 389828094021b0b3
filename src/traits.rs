use crate::error::Result;
use std::borrow::Cow;
use std::path::Path;

/// Finds gallery images on a single page.
#[async_trait::async_trait]
pub trait PageScraper: Send + Sync {
    /// Returns the full-size image URLs found on `page_url`, in page order.
    /// The same image may show up on several pages.
    async fn collect_image_urls(&self, page_url: &str) -> Result<Vec<String>>;
}

/// Issues HTTP GET requests for the download pipeline.
#[async_trait::async_trait]
pub trait HttpGetter: Send + Sync {
    async fn get(&self, url: &str) -> Result<Box<dyn HttpResponse>>;
}

#[async_trait::async_trait]
pub trait HttpResponse: Send {
    fn status(&self) -> u16;

    /// Raw Content-Type header value, if the response carried one.
    fn content_type(&self) -> Option<Cow<'_, str>>;

    /// Reads the remaining body to the end.
    async fn read_body(&mut self) -> Result<Vec<u8>>;
}

/// Destination storage for downloaded images.
#[async_trait::async_trait]
pub trait FileSystem: Send + Sync {
    /// Creates `path` and any missing parents.
    async fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;

    async fn write_file(&self, path: &Path, data: &[u8]) -> std::io::Result<()>;
}
