use crate::connection::{Database, DatabaseConfig};
use crate::document::{document_id, Collection, Document, ID_FIELD};
use crate::error::{Result, StoreError};
use crate::store::DocumentStore;
use async_trait::async_trait;
use sqlx::types::Json;

/// Document-collection backend on Postgres.
///
/// Each record is one JSONB row addressed by `(collection, id)`, so writes
/// touch a single row and rely on statement atomicity.
#[derive(Clone)]
pub struct PgDocumentStore {
    db: Database,
}

impl PgDocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Connect, verify the connection and create the schema if needed.
    pub async fn connect(config: DatabaseConfig) -> Result<Self> {
        let db = Database::new(config).await?;
        db.ping().await?;

        let store = Self::new(db);
        store.migrate().await?;
        Ok(store)
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                body JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                PRIMARY KEY (collection, id)
            )
            "#,
        )
        .execute(self.db.pool())
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS documents_collection_created_at_idx
            ON documents (collection, created_at DESC)
            "#,
        )
        .execute(self.db.pool())
        .await?;

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self, collection: Collection) -> Result<Vec<Document>> {
        let rows = sqlx::query_scalar::<_, Json<Document>>(
            r#"
            SELECT body FROM documents
            WHERE collection = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(collection.as_str())
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.into_iter().map(|Json(body)| body).collect())
    }

    async fn insert(&self, collection: Collection, document: Document) -> Result<Document> {
        let id = document_id(&document).ok_or_else(|| {
            StoreError::InvalidDocument(format!("{} document has no {}", collection, ID_FIELD))
        })?;

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(collection.as_str())
        .bind(&id)
        .bind(Json(&document))
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .map(|db_err| db_err.is_unique_violation())
                .unwrap_or(false);
            if duplicate {
                StoreError::duplicate(collection.as_str(), &id)
            } else {
                StoreError::from(e)
            }
        })?;

        Ok(document)
    }

    async fn update_by_id(&self, collection: Collection, id: &str, mut patch: Document) -> Result<bool> {
        patch.remove(ID_FIELD);

        // JSONB `||` replaces top-level keys, the same shallow merge as the file store
        let result = sqlx::query(
            r#"
            UPDATE documents SET body = body || $3
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .bind(Json(&patch))
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, collection: Collection, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.as_str())
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        self.db.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    #[ignore] // Only run with database available
    async fn test_document_roundtrip() {
        let store = PgDocumentStore::connect(DatabaseConfig::from_env())
            .await
            .expect("Failed to connect to database");

        let id = uuid::Uuid::new_v4().to_string();
        let document = json!({ "id": id, "name": "Hafsa", "text": "Smooth trip" })
            .as_object()
            .cloned()
            .unwrap();
        store.insert(Collection::Reviews, document).await.unwrap();

        let patch = json!({ "text": "Smooth trip, great guides" }).as_object().cloned().unwrap();
        assert!(store.update_by_id(Collection::Reviews, &id, patch).await.unwrap());

        let stored = store
            .list(Collection::Reviews)
            .await
            .unwrap()
            .into_iter()
            .find(|d| document_id(d).as_deref() == Some(id.as_str()))
            .unwrap();
        assert_eq!(stored["name"], "Hafsa");
        assert_eq!(stored["text"], "Smooth trip, great guides");

        assert!(store.delete_by_id(Collection::Reviews, &id).await.unwrap());
        assert!(!store.delete_by_id(Collection::Reviews, &id).await.unwrap());
    }
}
