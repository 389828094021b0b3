use crate::error::Result;
use crate::models::{Collection, PageRef};
use crate::traits::PageScraper;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Walks the gallery page by page until enough unique image URLs are known.
pub struct UrlCollector {
    scraper: Arc<dyn PageScraper>,
    base_url: String,
}

impl UrlCollector {
    pub fn new(scraper: Arc<dyn PageScraper>, base_url: impl Into<String>) -> Self {
        Self {
            scraper,
            base_url: base_url.into(),
        }
    }

    /// Returns at least `target` unique URLs in first-seen order.
    ///
    /// Images repeat across pages (the "Hot today" strip shows up next to the
    /// regular feed), so URLs are deduplicated by exact string. The scraper
    /// already normalised them to their full-size form.
    ///
    /// There is no page limit: a gallery that never yields `target` unique
    /// images keeps this looping. Any scraper error aborts with no partial result.
    pub async fn collect(&self, target: usize) -> Result<Collection> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut collection = Collection::default();
        let mut page = PageRef::first();

        while collection.urls.len() < target {
            let urls = self
                .scraper
                .collect_image_urls(&page.target(&self.base_url))
                .await?;

            let found = urls.len();
            let mut duplicates = 0;
            for url in urls {
                if seen.insert(url.clone()) {
                    collection.urls.push(url);
                } else {
                    duplicates += 1;
                }
            }

            info!(
                "Found {} images ({} duplicates, {} new)",
                found,
                duplicates,
                found - duplicates
            );

            collection.duplicates += duplicates;
            collection.pages_visited = page.number();
            page = page.next();
        }

        Ok(collection)
    }
}
