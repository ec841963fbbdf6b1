//! HTTP fetch layer for puzzle sources.

use crate::ExportError;

/// User-Agent string for HTTP requests.
pub const USER_AGENT: &str = concat!("puzpress/", env!("CARGO_PKG_VERSION"));

/// Create a configured reqwest client with standard headers.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default()
}

/// Byte source for puzzle files, keyed by URL.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ExportError>;
}

/// Fetches puzzle files over HTTP.
///
/// Any non-success status is reported as [`ExportError::Download`] with the
/// response status attached.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: http_client(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ExportError> {
        let res = self.client.get(url).send().await?;
        if !res.status().is_success() {
            return Err(ExportError::Download {
                url: url.to_string(),
                status: res.status().as_u16(),
            });
        }
        Ok(res.bytes().await?.to_vec())
    }
}
