use crate::document::{Collection, Document};
use crate::error::Result;
use async_trait::async_trait;

/// Persistence contract shared by every backend.
///
/// Documents are JSON objects carrying their own `id` field. Ids are
/// assigned by the repositories before `insert`, so a backend only has to
/// store and address them.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// All documents of a collection. Order is backend defined.
    async fn list(&self, collection: Collection) -> Result<Vec<Document>>;

    /// Store a new document and return it as stored.
    async fn insert(&self, collection: Collection, document: Document) -> Result<Document>;

    /// Shallow-merge `patch` onto the document with `id`.
    ///
    /// Returns `false` when no such document exists; nothing is written then.
    async fn update_by_id(&self, collection: Collection, id: &str, patch: Document) -> Result<bool>;

    /// Remove the document with `id`. Returns `false` if there was none,
    /// which is not an error.
    async fn delete_by_id(&self, collection: Collection, id: &str) -> Result<bool>;

    /// Check that the backend is reachable and readable.
    async fn ping(&self) -> Result<()>;
}
