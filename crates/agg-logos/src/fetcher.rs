//! Byte fetchers for logo providers.

use std::future::Future;
use std::time::Duration;

use crate::error::LogoError;

/// Retrieves the raw bytes behind a provider URL.
///
/// Implementations report non-2xx responses and transport failures as
/// errors; an empty body is returned as-is and judged by the caller.
pub trait LogoFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, LogoError>> + Send;
}

/// Plain HTTPS GET fetcher.
pub struct HttpLogoFetcher {
    http: reqwest::Client,
}

impl Default for HttpLogoFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

impl HttpLogoFetcher {
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("aggr/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
        }
    }
}

impl LogoFetcher for HttpLogoFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LogoError> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LogoError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.bytes().await?.to_vec())
    }
}
