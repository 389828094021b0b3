use crate::config::{HttpConfig, ScraperConfig};
use crate::error::Result;
use crate::traits::{HttpGetter, HttpResponse};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use std::borrow::Cow;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Fetches a gallery page as text. Any non-2xx status is an error.
    pub async fn get_page(&self, url: &str, config: &ScraperConfig) -> Result<String> {
        let mut request = self.client.get(url);

        // Add custom user agent if specified
        if let Some(user_agent) = &config.user_agent {
            request = request.header("User-Agent", user_agent);
        }

        if let Some(headers) = &config.headers {
            for (key, value) in headers {
                request = request.header(key, value);
            }
        }

        let response = request.send().await?.error_for_status()?;
        let text = response.text().await?;
        Ok(text)
    }
}

/// Renders a header value as text, replacing bytes that are not UTF-8.
fn header_text(value: &HeaderValue) -> Cow<'_, str> {
    String::from_utf8_lossy(value.as_bytes())
}

#[async_trait::async_trait]
impl HttpGetter for HttpClient {
    /// The status is passed through untouched; the caller decides what is acceptable.
    async fn get(&self, url: &str) -> Result<Box<dyn HttpResponse>> {
        let response = self.client.get(url).send().await?;
        Ok(Box::new(response))
    }
}

#[async_trait::async_trait]
impl HttpResponse for Response {
    fn status(&self) -> u16 {
        Response::status(self).as_u16()
    }

    fn content_type(&self) -> Option<Cow<'_, str>> {
        self.headers().get(CONTENT_TYPE).map(header_text)
    }

    async fn read_body(&mut self) -> Result<Vec<u8>> {
        let mut body = Vec::new();
        while let Some(chunk) = self.chunk().await? {
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}
