use std::path::{Path, PathBuf};

use agg_config::PROJECT_CONFIG_FILE;

/// Files that mark the root of a site project.
const ROOT_MARKERS: &[&str] = &[PROJECT_CONFIG_FILE, "package.json"];

/// Walk up from `start` to the nearest directory holding a root marker.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| ROOT_MARKERS.iter().any(|marker| dir.join(marker).is_file()))
        .map(Path::to_path_buf)
}

/// The explicit `--project` directory, else the detected root, else `cwd`.
pub fn resolve_project_root(project_override: Option<&str>, cwd: &Path) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    Ok(find_project_root(cwd).unwrap_or_else(|| {
        tracing::debug!(cwd = %cwd.display(), "no project marker found, using current directory");
        cwd.to_path_buf()
    }))
}
