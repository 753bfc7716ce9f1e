//! Whole-file JSON store.
//!
//! The dataset lives in one JSON file shaped as
//! `{"bookings": [...], "destinations": [...], "reviews": [...]}`.
//! Every operation reads the whole file and writes it back in full.

use crate::document::{document_id, merge, Collection, Document, ID_FIELD};
use crate::error::{Result, StoreError};
use crate::store::DocumentStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Dataset {
    #[serde(default)]
    bookings: Vec<Document>,
    #[serde(default)]
    destinations: Vec<Document>,
    #[serde(default)]
    reviews: Vec<Document>,

    // Unknown top-level keys survive a rewrite
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Dataset {
    fn collection(&self, collection: Collection) -> &Vec<Document> {
        match collection {
            Collection::Bookings => &self.bookings,
            Collection::Destinations => &self.destinations,
            Collection::Reviews => &self.reviews,
        }
    }

    fn collection_mut(&mut self, collection: Collection) -> &mut Vec<Document> {
        match collection {
            Collection::Bookings => &mut self.bookings,
            Collection::Destinations => &mut self.destinations,
            Collection::Reviews => &mut self.reviews,
        }
    }
}

/// JSON file backend.
///
/// All operations on one instance are serialized by a single lock held for
/// the full read-modify-write, so two concurrent writers cannot overwrite
/// each other's change. Separate processes sharing the file are not
/// coordinated.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or empty file is an empty dataset.
    async fn load(&self) -> Result<Dataset> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Dataset::default()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Dataset::default());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Write to a sibling temp file, then rename over the dataset.
    async fn save(&self, dataset: &Dataset) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(dataset)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }

    /// Run one read-modify-write step under the store lock. The closure
    /// returns its result and whether the dataset changed.
    async fn modify<R>(&self, apply: impl FnOnce(&mut Dataset) -> Result<(R, bool)>) -> Result<R> {
        let _guard = self.lock.lock().await;

        let mut dataset = self.load().await?;
        let (result, changed) = apply(&mut dataset)?;
        if changed {
            self.save(&dataset).await?;
        }

        Ok(result)
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    async fn list(&self, collection: Collection) -> Result<Vec<Document>> {
        let _guard = self.lock.lock().await;
        let dataset = self.load().await?;
        Ok(dataset.collection(collection).clone())
    }

    async fn insert(&self, collection: Collection, document: Document) -> Result<Document> {
        let id = document_id(&document).ok_or_else(|| {
            StoreError::InvalidDocument(format!("{} document has no {}", collection, ID_FIELD))
        })?;

        self.modify(|dataset| {
            let records = dataset.collection_mut(collection);
            if records.iter().any(|d| document_id(d).as_deref() == Some(id.as_str())) {
                return Err(StoreError::duplicate(collection.as_str(), &id));
            }
            records.push(document.clone());
            Ok((document, true))
        })
        .await
    }

    async fn update_by_id(&self, collection: Collection, id: &str, patch: Document) -> Result<bool> {
        self.modify(|dataset| {
            let found = dataset
                .collection_mut(collection)
                .iter_mut()
                .find(|d| document_id(d).as_deref() == Some(id));

            match found {
                Some(document) => {
                    merge(document, patch);
                    Ok((true, true))
                }
                None => Ok((false, false)),
            }
        })
        .await
    }

    async fn delete_by_id(&self, collection: Collection, id: &str) -> Result<bool> {
        self.modify(|dataset| {
            let records = dataset.collection_mut(collection);
            let before = records.len();
            records.retain(|d| document_id(d).as_deref() != Some(id));
            let removed = records.len() != before;
            Ok((removed, removed))
        })
        .await
    }

    async fn ping(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.load().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("booking-store-{}", uuid::Uuid::new_v4()))
            .join("bookings.json")
    }

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let store = JsonFileStore::new(temp_path());

        for collection in Collection::ALL {
            assert!(store.list(collection).await.unwrap().is_empty());
        }
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);

        assert!(matches!(
            store.list(Collection::Reviews).await,
            Err(StoreError::Serialization(_))
        ));
        assert!(store.ping().await.is_err());
    }

    #[tokio::test]
    async fn test_insert_update_delete() {
        let store = JsonFileStore::new(temp_path());

        store
            .insert(Collection::Destinations, doc(json!({ "id": 1, "title": "Makkah", "price": 900 })))
            .await
            .unwrap();

        assert!(store
            .update_by_id(Collection::Destinations, "1", doc(json!({ "price": 950 })))
            .await
            .unwrap());

        let listed = store.list(Collection::Destinations).await.unwrap();
        assert_eq!(Value::Object(listed[0].clone()), json!({ "id": 1, "title": "Makkah", "price": 950 }));

        assert!(store.delete_by_id(Collection::Destinations, "1").await.unwrap());
        assert!(!store.delete_by_id(Collection::Destinations, "1").await.unwrap());
        assert!(store.list(Collection::Destinations).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_id_leaves_file_untouched() {
        let store = JsonFileStore::new(temp_path());
        store
            .insert(Collection::Reviews, doc(json!({ "id": 5, "name": "Bilal", "text": "Great" })))
            .await
            .unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        let updated = store
            .update_by_id(Collection::Reviews, "6", doc(json!({ "text": "changed" })))
            .await
            .unwrap();

        assert!(!updated);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_insert_requires_id_and_rejects_duplicates() {
        let store = JsonFileStore::new(temp_path());

        assert!(matches!(
            store.insert(Collection::Reviews, doc(json!({ "name": "x" }))).await,
            Err(StoreError::InvalidDocument(_))
        ));

        store.insert(Collection::Reviews, doc(json!({ "id": 1 }))).await.unwrap();
        assert!(matches!(
            store.insert(Collection::Reviews, doc(json!({ "id": 1 }))).await,
            Err(StoreError::DuplicateEntry(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_top_level_keys_survive_rewrite() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"reviews": [], "settings": {"theme": "green"}}"#).unwrap();
        let store = JsonFileStore::new(&path);

        store.insert(Collection::Reviews, doc(json!({ "id": 1 }))).await.unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["settings"]["theme"], "green");
        assert_eq!(raw["reviews"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_are_all_kept() {
        let store = Arc::new(JsonFileStore::new(temp_path()));

        let handles: Vec<_> = (0..25)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .insert(Collection::Bookings, doc(json!({ "id": format!("b-{}", i) })))
                        .await
                        .unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.list(Collection::Bookings).await.unwrap().len(), 25);
    }
}
