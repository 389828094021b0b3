use crate::config::ScraperConfig;
use crate::error::{CatScraperError, Result};
use crate::traits::PageScraper;
use crate::utils::HttpClient;
use scraper::{Html, Selector};
use tracing::{debug, info};
use url::Url;

/// Scrapes meme images from the Cheezburger gallery.
/// The same image may be returned for different pages (e.g. "Hot today").
pub struct CheezburgerScraper {
    http_client: HttpClient,
    config: ScraperConfig,
}

impl CheezburgerScraper {
    pub fn new(http_client: HttpClient, config: ScraperConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn extract_image_urls(&self, html: &str) -> Result<Vec<String>> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("img[class]")
            .map_err(|e| CatScraperError::scraping(format!("Invalid image selector: {}", e)))?;

        let mut image_urls = Vec::new();
        for element in document.select(&selector) {
            let class = element.value().attr("class").unwrap_or_default();
            if !self.config.image_classes.iter().any(|c| c == class) {
                continue;
            }

            // Lazy loaded images keep a placeholder in `src` until scrolled into view.
            let src = element.value().attr("src").unwrap_or_default();
            let image_url = if src.starts_with("https") {
                src
            } else {
                element.value().attr("data-src").unwrap_or_default()
            };

            image_urls.push(image_url.to_string());
        }

        Ok(image_urls)
    }
}

#[async_trait::async_trait]
impl PageScraper for CheezburgerScraper {
    async fn collect_image_urls(&self, page_url: &str) -> Result<Vec<String>> {
        info!("[CHEEZBURGER SCRAPER] Visiting {}", page_url);

        let html = self.http_client.get_page(page_url, &self.config).await?;
        debug!("[CHEEZBURGER SCRAPER] HTML length: {}", html.len());

        let image_urls = self.extract_image_urls(&html)?;
        debug!("[CHEEZBURGER SCRAPER] Found {} gallery images", image_urls.len());

        image_urls.iter().map(|url| full_size_url(url)).collect()
    }
}

/// Rewrites `https://i.chzbgr.com/{size}/{id1}/{id2}/{slug}` to
/// `https://i.chzbgr.com/full/{id1}/{id2}`.
///
/// Thumbnails and full-size versions of one image, as well as copies posted
/// under different slugs, all map to the same URL.
pub fn full_size_url(image_url: &str) -> Result<String> {
    let mut url = Url::parse(image_url)
        .map_err(|e| CatScraperError::full_size_url(image_url, format!("parse: {}", e)))?;

    let path = url.path().to_string();
    let parts: Vec<&str> = path.strip_prefix('/').unwrap_or(&path).split('/').collect();
    if parts.len() != 4 {
        return Err(CatScraperError::full_size_url(
            image_url,
            "unexpected path format, expected {size}/{id1}/{id2}/{slug}",
        ));
    }

    url.set_path(&format!("/full/{}/{}", parts[1], parts[2]));
    Ok(url.to_string())
}
