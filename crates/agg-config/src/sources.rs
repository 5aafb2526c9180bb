//! Remote data-source configuration.

use agg_core::Collection;
use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Whether outbound API calls are made at all.
    /// When `false`, every collection fetches as empty.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Bearer token sent with every data-source request.
    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub tools_url: String,

    #[serde(default)]
    pub categories_url: String,

    #[serde(default)]
    pub agents_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: String::new(),
            tools_url: String::new(),
            categories_url: String::new(),
            agents_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourcesConfig {
    /// Endpoint for a collection, `None` when unset.
    #[must_use]
    pub fn endpoint(&self, collection: Collection) -> Option<&str> {
        let url = match collection {
            Collection::Tools => &self.tools_url,
            Collection::Categories => &self.categories_url,
            Collection::Agents => &self.agents_url,
        };
        if url.is_empty() { None } else { Some(url) }
    }

    /// Enabled and at least one endpoint set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.enabled && Collection::ALL.iter().any(|c| self.endpoint(*c).is_some())
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
