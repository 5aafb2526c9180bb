//! # agg-logos
//!
//! Company logos for the aggregator site.
//!
//! Every tool and agent resolves to a file in one flat logo directory:
//! either a brand logo downloaded once from an ordered list of public logo
//! providers, or the shared placeholder. The crate covers
//!
//! - [`naming`]: deterministic file names, best-effort domains, and
//!   canonical `images/logos/<file>` references
//! - [`LogoManager`]: acquisition with provider fallback and the full
//!   per-company pipeline
//! - [`cleanup`] and [`audit`]: pruning and reporting on the directory
//! - [`fields`]: bulk fixes of the `logo` field
//!
//! Network failures never escalate; they degrade to the placeholder and
//! are logged with `tracing`.

pub mod audit;
pub mod cleanup;
pub mod fields;
pub mod naming;

mod error;
mod fetcher;
mod manager;
mod provider;

pub use audit::{AuditReport, CompanyLogo, audit};
pub use cleanup::{CleanupReport, cleanup_unused, current_logos, needed_logos};
pub use error::LogoError;
pub use fetcher::{HttpLogoFetcher, LogoFetcher};
pub use fields::{PathFix, ensure_logo_fields, fix_logo_paths};
pub use manager::{LogoManager, LogoOutcome, PlaceholderReason, ProcessSummary};
pub use provider::{ProviderList, first_success};
