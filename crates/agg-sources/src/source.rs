//! Data-source clients.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use agg_core::{Collection, Record};

use crate::error::SourceError;
use crate::http::read_records;

/// Somewhere fresh collection records can be fetched from.
pub trait DataSource {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn fetch(
        &self,
        collection: Collection,
    ) -> impl Future<Output = Result<Vec<Record>, SourceError>> + Send;
}

/// JSON-over-HTTP source with one endpoint per collection.
pub struct HttpSource {
    http: reqwest::Client,
    endpoints: HashMap<Collection, String>,
    api_key: Option<String>,
}

impl HttpSource {
    /// Create a source with no endpoints.
    ///
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
            endpoints: HashMap::new(),
            api_key: None,
        }
    }

    /// Set the endpoint for `collection`. Empty URLs are ignored.
    #[must_use]
    pub fn with_endpoint(mut self, collection: Collection, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.is_empty() {
            self.endpoints.insert(collection, url);
        }
        self
    }

    /// Bearer token sent with every request. Empty keys are ignored.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = (!api_key.is_empty()).then_some(api_key);
        self
    }

    #[must_use]
    pub fn endpoint(&self, collection: Collection) -> Option<&str> {
        self.endpoints.get(&collection).map(String::as_str)
    }
}

impl DataSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, collection: Collection) -> Result<Vec<Record>, SourceError> {
        let url = self
            .endpoint(collection)
            .ok_or(SourceError::NotConfigured(collection))?;
        tracing::info!(%collection, url, "fetching collection");

        let mut request = self.http.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        read_records(request.send().await?).await
    }
}

/// A source that never makes a request and always yields nothing.
///
/// Used when outbound API calls are switched off, so a refresh keeps the
/// existing data untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSource;

impl DataSource for DisabledSource {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn fetch(&self, collection: Collection) -> Result<Vec<Record>, SourceError> {
        tracing::debug!(%collection, "api calls disabled, fetching nothing");
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_settings_are_ignored() {
        let source = HttpSource::new(Duration::from_secs(5))
            .with_endpoint(Collection::Tools, "https://api.example.com/ai-tools")
            .with_endpoint(Collection::Agents, "")
            .with_api_key("");

        assert_eq!(
            source.endpoint(Collection::Tools),
            Some("https://api.example.com/ai-tools")
        );
        assert!(source.endpoint(Collection::Agents).is_none());
        assert!(source.api_key.is_none());
    }

    #[tokio::test]
    async fn missing_endpoint_is_not_configured() {
        let source = HttpSource::new(Duration::from_secs(5));
        let err = source.fetch(Collection::Categories).await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::NotConfigured(Collection::Categories)
        ));
    }

    #[tokio::test]
    async fn disabled_source_is_empty() {
        for collection in Collection::ALL {
            assert!(DisabledSource.fetch(collection).await.unwrap().is_empty());
        }
    }
}
