//! Site deployment settings passed to the framework build.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "/aggregator".to_string()
}

fn default_site_url() -> String {
    "https://www.baip.ai".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Base path the site is served under (exported as `BASE_URL`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Public origin of the site (exported as `SITE`).
    #[serde(default = "default_site_url")]
    pub site_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site_url: default_site_url(),
        }
    }
}
