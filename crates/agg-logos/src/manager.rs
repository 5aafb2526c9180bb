//! Per-company logo acquisition.

use std::path::{Path, PathBuf};
use std::time::Duration;

use agg_core::Record;
use serde::Serialize;

use crate::cleanup::{CleanupReport, cleanup_unused};
use crate::error::LogoError;
use crate::fetcher::LogoFetcher;
use crate::naming::{
    extract_domain, is_agent, logo_reference, normalize_logo_path, record_logo_filename,
};
use crate::provider::{ProviderList, first_success};

/// Why a company ended up with the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderReason {
    Agent,
    NoDomain,
    AllProvidersFailed,
}

/// Result of resolving one company's logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LogoOutcome {
    Existing {
        filename: String,
    },
    Downloaded {
        filename: String,
        /// Zero-based position in the provider list.
        provider: usize,
        bytes: usize,
    },
    Placeholder {
        filename: String,
        reason: PlaceholderReason,
    },
}

impl LogoOutcome {
    /// File name inside the logo directory the company now resolves to.
    #[must_use]
    pub fn filename(&self) -> &str {
        match self {
            Self::Existing { filename }
            | Self::Downloaded { filename, .. }
            | Self::Placeholder { filename, .. } => filename,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    pub processed: usize,
    pub skipped: usize,
    pub existing: usize,
    pub downloaded: usize,
    pub placeholders: usize,
    pub cleanup: CleanupReport,
}

/// Resolves company logos into a flat directory, downloading missing ones
/// from an ordered provider list.
pub struct LogoManager<F> {
    logo_dir: PathBuf,
    providers: ProviderList,
    fetcher: F,
    placeholder: String,
    keep: Vec<String>,
    delay: Duration,
}

impl<F: LogoFetcher> LogoManager<F> {
    #[must_use]
    pub fn new(logo_dir: impl Into<PathBuf>, providers: ProviderList, fetcher: F) -> Self {
        Self {
            logo_dir: logo_dir.into(),
            providers,
            fetcher,
            placeholder: "placeholder.svg".to_string(),
            keep: Vec::new(),
            delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// File names cleanup must never delete.
    #[must_use]
    pub fn with_keep(mut self, keep: Vec<String>) -> Self {
        self.keep = keep;
        self
    }

    /// Pause between companies in [`process`](Self::process).
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn logo_dir(&self) -> &Path {
        &self.logo_dir
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    #[must_use]
    pub fn keep(&self) -> &[String] {
        &self.keep
    }

    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn placeholder_outcome(&self, reason: PlaceholderReason) -> LogoOutcome {
        LogoOutcome::Placeholder {
            filename: self.placeholder.clone(),
            reason,
        }
    }

    /// Resolve one company's logo.
    ///
    /// An existing file wins; agents get the placeholder without any network
    /// access; otherwise providers are tried in order. Provider failures are
    /// logged and never escalate.
    pub async fn acquire(&self, company: &Record) -> LogoOutcome {
        let name = company.name().unwrap_or_default();
        let filename = record_logo_filename(company);
        let path = self.logo_dir.join(&filename);

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::debug!(company = name, %filename, "logo already exists");
            return LogoOutcome::Existing { filename };
        }

        if is_agent(company) {
            tracing::debug!(company = name, "agent uses placeholder");
            return self.placeholder_outcome(PlaceholderReason::Agent);
        }

        let Some(domain) = extract_domain(company.url(), name) else {
            tracing::warn!(company = name, "no domain to query, using placeholder");
            return self.placeholder_outcome(PlaceholderReason::NoDomain);
        };

        tracing::info!(company = name, %domain, "downloading logo");
        let urls = self.providers.urls_for(&domain);
        let path = path.as_path();
        let result = first_success(urls.iter().enumerate(), move |(index, url)| async move {
            self.download(url, path)
                .await
                .map(|bytes| (index, bytes))
                .inspect_err(|error| {
                    tracing::warn!(company = name, provider = index, %error, "logo provider failed");
                })
        })
        .await;

        match result {
            Ok((provider, bytes)) => {
                tracing::info!(company = name, provider, bytes, %filename, "downloaded logo");
                LogoOutcome::Downloaded {
                    filename,
                    provider,
                    bytes,
                }
            }
            Err(failures) => {
                tracing::warn!(
                    company = name,
                    attempts = failures.len(),
                    "could not download logo, using placeholder"
                );
                self.placeholder_outcome(PlaceholderReason::AllProvidersFailed)
            }
        }
    }

    /// Fetch `url` into `path`. Nothing is left behind on failure.
    async fn download(&self, url: &str, path: &Path) -> Result<usize, LogoError> {
        let bytes = self.fetcher.fetch(url).await?;
        if bytes.is_empty() {
            return Err(LogoError::EmptyBody {
                url: url.to_string(),
            });
        }
        if let Err(e) = tokio::fs::write(path, &bytes).await {
            let _ = tokio::fs::remove_file(path).await;
            return Err(LogoError::io(path, e));
        }
        Ok(bytes.len())
    }

    /// Run the whole logo pipeline over tools then agents.
    ///
    /// Existing references are normalized, each named company is resolved
    /// and its `logo` set to the result, then unused files are removed.
    /// `on_company` is called once per visited record.
    ///
    /// # Errors
    ///
    /// Returns [`LogoError::Io`] if the logo directory cannot be created or
    /// listed. Per-company failures only degrade to the placeholder.
    pub async fn process(
        &self,
        tools: &mut [Record],
        agents: &mut [Record],
        mut on_company: impl FnMut(&Record),
    ) -> Result<ProcessSummary, LogoError> {
        tokio::fs::create_dir_all(&self.logo_dir)
            .await
            .map_err(|e| LogoError::io(&self.logo_dir, e))?;

        let mut summary = ProcessSummary::default();
        let mut first = true;
        for company in tools.iter_mut().chain(agents.iter_mut()) {
            on_company(company);
            if company.name().is_none() {
                tracing::warn!(company = %company.label(), "skipping company without a name");
                summary.skipped += 1;
                continue;
            }

            if !first && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            first = false;

            if let Some(current) = company.logo() {
                let normalized = normalize_logo_path(current, &self.placeholder);
                if normalized != current {
                    tracing::debug!(company = %company.label(), from = current, to = %normalized, "normalized logo path");
                    company.set_logo(normalized);
                }
            }

            let outcome = self.acquire(company).await;
            match outcome {
                LogoOutcome::Existing { .. } => summary.existing += 1,
                LogoOutcome::Downloaded { .. } => summary.downloaded += 1,
                LogoOutcome::Placeholder { .. } => summary.placeholders += 1,
            }
            company.set_logo(logo_reference(outcome.filename()));
            summary.processed += 1;
        }

        summary.cleanup = cleanup_unused(
            &self.logo_dir,
            tools.iter().chain(agents.iter()),
            &self.placeholder,
            &self.keep,
            false,
        )?;

        tracing::info!(
            processed = summary.processed,
            downloaded = summary.downloaded,
            placeholders = summary.placeholders,
            removed = summary.cleanup.removed.len(),
            "logo processing complete"
        );
        Ok(summary)
    }
}
