use agg_core::Collection;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingField,
    UnknownField,
    UnknownCategory,
    UnknownSubcategory,
    MissingLogo,
    EmptyLogo,
    DuplicateId,
}

/// One finding against one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub collection: Collection,
    /// Record id, or `unknown` when the record has none.
    pub record_id: String,
    pub kind: ViolationKind,
    pub message: String,
    pub severity: Severity,
}

impl Violation {
    pub(crate) fn error(
        collection: Collection,
        record_id: impl Into<String>,
        kind: ViolationKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            collection,
            record_id: record_id.into(),
            kind,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub(crate) fn warning(
        collection: Collection,
        record_id: impl Into<String>,
        kind: ViolationKind,
        message: impl Into<String>,
    ) -> Self {
        Self::error(collection, record_id, kind, message).downgraded()
    }

    #[must_use]
    pub(crate) fn downgraded(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }
}
