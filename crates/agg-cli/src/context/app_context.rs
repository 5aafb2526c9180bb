use std::path::PathBuf;
use std::time::Duration;

use agg_config::{AggConfig, ResolvedPaths};
use agg_core::{Collection, ValidationMode};
use agg_logos::{HttpLogoFetcher, LogoManager, ProviderList};
use agg_sources::{DataSource, DisabledSource, HttpSource, SourceError};
use agg_store::DataStore;
use anyhow::Context;

use super::project_root::resolve_project_root;
use crate::cli::GlobalFlags;

/// Shared application state resolved once at startup.
pub struct AppContext {
    pub config: AggConfig,
    pub paths: ResolvedPaths,
    pub mode: ValidationMode,
}

impl AppContext {
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        let project_root = resolve_project_root(flags.project.as_deref(), &cwd)?;
        let config = AggConfig::load_with_dotenv(&project_root).with_context(|| {
            format!(
                "failed to load configuration for {}",
                project_root.display()
            )
        })?;
        Ok(Self::new(project_root, config, flags.mode))
    }

    #[must_use]
    pub fn new(project_root: PathBuf, config: AggConfig, mode: Option<ValidationMode>) -> Self {
        let paths = config.paths.resolve(&project_root);
        let mode = mode.unwrap_or(config.validation.mode);
        tracing::debug!(root = %paths.project_root.display(), %mode, "project resolved");
        Self {
            config,
            paths,
            mode,
        }
    }

    #[must_use]
    pub fn store(&self) -> DataStore {
        DataStore::new(&self.paths.data_dir)
    }

    /// The configured data source, or [`DisabledSource`] when API calls are
    /// off (`offline`, `sources.enabled = false`, or no endpoints).
    #[must_use]
    pub fn source(&self, offline: bool) -> Source {
        let sources = &self.config.sources;
        if offline || !sources.enabled {
            tracing::info!("api calls disabled, keeping existing data");
            return Source::Disabled(DisabledSource);
        }
        if !sources.is_configured() {
            tracing::warn!("no data source endpoints configured, keeping existing data");
            return Source::Disabled(DisabledSource);
        }

        let mut http = HttpSource::new(Duration::from_secs(sources.timeout_secs))
            .with_api_key(sources.api_key.clone());
        for collection in Collection::ALL {
            if let Some(url) = sources.endpoint(collection) {
                http = http.with_endpoint(collection, url);
            }
        }
        Source::Http(http)
    }

    pub fn logo_manager(&self) -> anyhow::Result<LogoManager<HttpLogoFetcher>> {
        let logos = &self.config.logos;
        let providers = ProviderList::new(logos.providers.clone())
            .context("invalid logo provider configuration")?;
        let fetcher = HttpLogoFetcher::new(Duration::from_secs(logos.timeout_secs));
        Ok(LogoManager::new(&self.paths.logo_dir, providers, fetcher)
            .with_placeholder(logos.placeholder.clone())
            .with_keep(logos.keep.clone())
            .with_delay(Duration::from_millis(logos.delay_ms)))
    }
}

/// Data source chosen from configuration.
pub enum Source {
    Http(HttpSource),
    Disabled(DisabledSource),
}

impl DataSource for Source {
    fn name(&self) -> &str {
        match self {
            Self::Http(source) => source.name(),
            Self::Disabled(source) => source.name(),
        }
    }

    async fn fetch(
        &self,
        collection: Collection,
    ) -> Result<Vec<agg_core::Record>, SourceError> {
        match self {
            Self::Http(source) => source.fetch(collection).await,
            Self::Disabled(source) => source.fetch(collection).await,
        }
    }
}
