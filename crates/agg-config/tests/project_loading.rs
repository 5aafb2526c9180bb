//! Loading from a real project directory on disk.
//!
//! Each test gets its own temp project so the `aggregator.toml` and `.env`
//! files never leak between cases.

use std::fs;

use agg_config::{AggConfig, ConfigError, PROJECT_CONFIG_FILE};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn project(config: Option<&str>) -> TempDir {
    let dir = TempDir::new().expect("tempdir should create");
    if let Some(config) = config {
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), config).expect("config should write");
    }
    dir
}

#[test]
fn missing_project_file_uses_defaults() {
    let dir = project(None);
    let config = AggConfig::load(dir.path()).expect("defaults should load");

    let paths = config.paths.resolve(dir.path());
    assert_eq!(paths.data_dir, dir.path().join("src/data"));
    assert_eq!(paths.dist_logo_dir, dir.path().join("dist/images/logos"));
}

#[test]
fn project_file_overrides_sections() {
    let dir = project(Some(
        r#"
        [logos]
        delay_ms = 0
        min_existing = 25

        [build]
        command = "npm run build:site"
        featured_tools = 2
        "#,
    ));

    let config = AggConfig::load(dir.path()).expect("config should load");

    assert_eq!(config.logos.delay_ms, 0);
    assert_eq!(config.logos.min_existing, 25);
    assert_eq!(config.build.command, "npm run build:site");
    assert_eq!(config.build.featured_tools, 2);
    assert_eq!(config.build.featured_agents, 3);
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let dir = project(Some(
        r#"
        [logos]
        providers = ["https://logos.example.com/static.png"]
        "#,
    ));

    let err = AggConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn malformed_project_file_is_a_figment_error() {
    let dir = project(Some("[paths\ndata_dir = "));
    let err = AggConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Figment(_)));
}

#[test]
fn dotenv_in_project_root_feeds_env_layer() {
    let dir = project(None);
    fs::write(
        dir.path().join(".env"),
        "AGGREGATOR_SITE__SITE_URL=https://staging.example.com\n",
    )
    .expect(".env should write");

    let config = AggConfig::load_with_dotenv(dir.path()).expect("config should load");

    assert_eq!(config.site.site_url, "https://staging.example.com");
}
