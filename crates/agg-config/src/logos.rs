//! Logo pipeline configuration.

use serde::{Deserialize, Serialize};

fn default_providers() -> Vec<String> {
    vec![
        "https://logo.clearbit.com/{domain}".to_string(),
        "https://img.logo.dev/{domain}".to_string(),
        "https://logo.uplead.com/{domain}".to_string(),
    ]
}

const fn default_delay_ms() -> u64 {
    100
}

fn default_placeholder() -> String {
    "placeholder.svg".to_string()
}

fn default_keep() -> Vec<String> {
    [
        "aws-ai.png",
        "openai.png",
        "crowdstrike.png",
        "intercom.png",
        "datadog.png",
        "darktrace.png",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

const fn default_min_existing() -> usize {
    10
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogosConfig {
    /// Ordered provider URL templates; `{domain}` is substituted.
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,

    /// Pause between companies, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Shared fallback asset in the logo directory.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// File names never removed by cleanup (bundled legacy logos).
    #[serde(default = "default_keep")]
    pub keep: Vec<String>,

    /// `ensure-logos` skips downloading when more files than this exist.
    #[serde(default = "default_min_existing")]
    pub min_existing: usize,

    /// Per-download timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LogosConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            delay_ms: default_delay_ms(),
            placeholder: default_placeholder(),
            keep: default_keep(),
            min_existing: default_min_existing(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
