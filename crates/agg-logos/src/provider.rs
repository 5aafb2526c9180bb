//! Ordered logo provider policy.

use std::future::Future;

use crate::error::LogoError;

/// Ordered list of provider URL templates, tried first to last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderList {
    templates: Vec<String>,
}

impl ProviderList {
    /// # Errors
    ///
    /// Returns [`LogoError::InvalidTemplate`] if a template lacks `{domain}`.
    pub fn new(templates: Vec<String>) -> Result<Self, LogoError> {
        if let Some(bad) = templates.iter().find(|t| !t.contains("{domain}")) {
            return Err(LogoError::InvalidTemplate(bad.clone()));
        }
        Ok(Self { templates })
    }

    /// Provider URLs for `domain`, in policy order.
    #[must_use]
    pub fn urls_for(&self, domain: &str) -> Vec<String> {
        let encoded = urlencoding::encode(domain);
        self.templates
            .iter()
            .map(|template| template.replace("{domain}", &encoded))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Run `attempt` over `candidates` in order and return the first success.
///
/// Stops at the first `Ok`. When every candidate fails, all errors are
/// returned in candidate order.
///
/// # Errors
///
/// Returns the collected failures when no candidate succeeds (an empty
/// vector for no candidates).
pub async fn first_success<I, T, E, F, Fut>(candidates: I, mut attempt: F) -> Result<T, Vec<E>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut failures = Vec::new();
    for candidate in candidates {
        match attempt(candidate).await {
            Ok(value) => return Ok(value),
            Err(error) => failures.push(error),
        }
    }
    Err(failures)
}
