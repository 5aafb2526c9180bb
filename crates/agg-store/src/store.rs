use std::path::{Path, PathBuf};

use agg_core::{Collection, Record};
use serde::Serialize;

use crate::error::StoreError;
use crate::json;

/// All three collections loaded together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub tools: Vec<Record>,
    pub categories: Vec<Record>,
    pub agents: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub fn get(&self, collection: Collection) -> &[Record] {
        match collection {
            Collection::Tools => &self.tools,
            Collection::Categories => &self.categories,
            Collection::Agents => &self.agents,
        }
    }

    pub fn get_mut(&mut self, collection: Collection) -> &mut Vec<Record> {
        match collection {
            Collection::Tools => &mut self.tools,
            Collection::Categories => &mut self.categories,
            Collection::Agents => &mut self.agents,
        }
    }

    /// Tools followed by agents.
    pub fn companies(&self) -> impl Iterator<Item = &Record> {
        self.tools.iter().chain(self.agents.iter())
    }
}

/// A data directory holding one JSON file per collection.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{}.json", collection.file_stem()))
    }

    /// Fail-soft load; see [`json::load`].
    #[must_use]
    pub fn load(&self, collection: Collection) -> Vec<Record> {
        let records = json::load(&self.path(collection));
        tracing::debug!(%collection, count = records.len(), "loaded collection");
        records
    }

    /// Strict load; see [`json::try_load`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file is missing or malformed.
    pub fn try_load(&self, collection: Collection) -> Result<Vec<Record>, StoreError> {
        json::try_load(&self.path(collection))
    }

    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn save(&self, collection: Collection, records: &[Record]) -> Result<(), StoreError> {
        json::save(&self.path(collection), records)?;
        tracing::debug!(%collection, count = records.len(), "saved collection");
        Ok(())
    }

    #[must_use]
    pub fn load_all(&self) -> Dataset {
        Dataset {
            tools: self.load(Collection::Tools),
            categories: self.load(Collection::Categories),
            agents: self.load(Collection::Agents),
        }
    }
}
