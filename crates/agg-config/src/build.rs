//! Build orchestration settings.

use agg_core::ValidationMode;
use serde::{Deserialize, Serialize};

fn default_command() -> String {
    "npx astro build".to_string()
}

const fn default_featured_tools() -> usize {
    6
}

const fn default_featured_categories() -> usize {
    4
}

const fn default_featured_agents() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Framework build command, split on whitespace and run in the project root.
    #[serde(default = "default_command")]
    pub command: String,

    #[serde(default = "default_featured_tools")]
    pub featured_tools: usize,

    #[serde(default = "default_featured_categories")]
    pub featured_categories: usize,

    #[serde(default = "default_featured_agents")]
    pub featured_agents: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            featured_tools: default_featured_tools(),
            featured_categories: default_featured_categories(),
            featured_agents: default_featured_agents(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Severity of missing logo files.
    #[serde(default)]
    pub mode: ValidationMode,
}
