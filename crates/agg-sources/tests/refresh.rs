//! Refreshing collections from a scripted source.

use agg_core::{Collection, Record};
use agg_sources::{DataSource, DisabledSource, SourceError, refresh_collection};
use agg_store::DataStore;
use pretty_assertions::assert_eq;
use serde_json::json;

/// Yields fixed records, or fails every request.
struct ScriptedSource {
    records: Option<Vec<Record>>,
}

impl DataSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self, _collection: Collection) -> Result<Vec<Record>, SourceError> {
        self.records.clone().ok_or(SourceError::Api {
            status: 500,
            message: "boom".to_string(),
        })
    }
}

fn rec(value: serde_json::Value) -> Record {
    Record::from_value(value).unwrap()
}

#[tokio::test]
async fn merges_fetched_records_into_the_store() {
    let temp = tempfile::tempdir().expect("tempdir should create");
    let store = DataStore::new(temp.path());
    store
        .save(Collection::Tools, &[rec(json!({"id": 1, "a": 1}))])
        .unwrap();
    let source = ScriptedSource {
        records: Some(vec![rec(json!({"id": 1, "a": 2})), rec(json!({"id": 2, "a": 3}))]),
    };

    let summary = refresh_collection(&store, &source, Collection::Tools)
        .await
        .unwrap();

    assert_eq!(summary.existing, 1);
    assert_eq!(summary.fetched, 2);
    assert_eq!(summary.total, 2);
    assert_eq!(
        store.try_load(Collection::Tools).unwrap(),
        vec![rec(json!({"id": 1, "a": 2})), rec(json!({"id": 2, "a": 3}))]
    );
}

#[tokio::test]
async fn failing_source_keeps_existing_data() {
    let temp = tempfile::tempdir().expect("tempdir should create");
    let store = DataStore::new(temp.path());
    let existing = vec![rec(json!({"id": "aws-ai", "name": "AWS AI"}))];
    store.save(Collection::Agents, &existing).unwrap();

    let summary = refresh_collection(&store, &ScriptedSource { records: None }, Collection::Agents)
        .await
        .unwrap();

    assert_eq!(summary.fetched, 0);
    assert_eq!(store.try_load(Collection::Agents).unwrap(), existing);
}

#[tokio::test]
async fn disabled_source_creates_missing_files() {
    let temp = tempfile::tempdir().expect("tempdir should create");
    let store = DataStore::new(temp.path().join("data"));

    let summary = refresh_collection(&store, &DisabledSource, Collection::Categories)
        .await
        .unwrap();

    assert_eq!(summary.total, 0);
    assert!(store.try_load(Collection::Categories).unwrap().is_empty());
}
