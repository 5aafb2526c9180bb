use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the data collections the site is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Tools,
    Categories,
    Agents,
}

impl Collection {
    /// Every collection, in load order.
    pub const ALL: [Self; 3] = [Self::Tools, Self::Categories, Self::Agents];

    /// Collections whose records are companies (carry logos and category refs).
    pub const COMPANIES: [Self; 2] = [Self::Tools, Self::Agents];

    /// File stem shared by the JSON store and the generated JS binding.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Tools => "tools",
            Self::Categories => "categories",
            Self::Agents => "agents",
        }
    }

    /// Name of the `export const` in the generated JS binding.
    #[must_use]
    pub const fn export_name(self) -> &'static str {
        self.file_stem()
    }

    /// Singular, capitalized label used in violation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tools => "Tool",
            Self::Categories => "Category",
            Self::Agents => "Agent",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}
