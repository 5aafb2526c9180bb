//! Directory layout of the site project.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    "src/data".to_string()
}

fn default_logo_dir() -> String {
    "public/images/logos".to_string()
}

fn default_bindings_dir() -> String {
    "src/data".to_string()
}

fn default_processed_dir() -> String {
    "src/data/processed".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

/// Project-relative (or absolute) directories, as written in configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// JSON data files, one per collection.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Flat directory of logo images plus the shared placeholder.
    #[serde(default = "default_logo_dir")]
    pub logo_dir: String,

    /// Where generated `export const` JS modules are written.
    #[serde(default = "default_bindings_dir")]
    pub bindings_dir: String,

    /// Where the processed `featured.js` bundle is written.
    #[serde(default = "default_processed_dir")]
    pub processed_dir: String,

    /// Build output of the site framework.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            logo_dir: default_logo_dir(),
            bindings_dir: default_bindings_dir(),
            processed_dir: default_processed_dir(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl PathsConfig {
    /// Resolve every directory against `project_root`.
    ///
    /// Absolute paths in configuration are kept as they are.
    #[must_use]
    pub fn resolve(&self, project_root: &Path) -> ResolvedPaths {
        let join = |value: &str| {
            let path = Path::new(value);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_root.join(path)
            }
        };

        let dist_dir = join(&self.dist_dir);
        ResolvedPaths {
            project_root: project_root.to_path_buf(),
            data_dir: join(&self.data_dir),
            logo_dir: join(&self.logo_dir),
            bindings_dir: join(&self.bindings_dir),
            processed_dir: join(&self.processed_dir),
            dist_logo_dir: dist_dir.join("images").join("logos"),
            dist_dir,
        }
    }
}

/// Absolute directories threaded into every component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    pub project_root: PathBuf,
    pub data_dir: PathBuf,
    pub logo_dir: PathBuf,
    pub bindings_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub dist_dir: PathBuf,
    /// Mirror of `logo_dir` expected after the framework build.
    pub dist_logo_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolves_relative_paths_against_root() {
        let resolved = PathsConfig::default().resolve(Path::new("/srv/site"));
        assert_eq!(resolved.data_dir, PathBuf::from("/srv/site/src/data"));
        assert_eq!(resolved.logo_dir, PathBuf::from("/srv/site/public/images/logos"));
        assert_eq!(resolved.dist_logo_dir, PathBuf::from("/srv/site/dist/images/logos"));
    }

    #[test]
    fn keeps_absolute_paths() {
        let config = PathsConfig {
            logo_dir: "/var/logos".to_string(),
            ..PathsConfig::default()
        };
        let resolved = config.resolve(Path::new("/srv/site"));
        assert_eq!(resolved.logo_dir, PathBuf::from("/var/logos"));
    }
}
