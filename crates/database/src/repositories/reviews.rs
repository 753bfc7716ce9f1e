use crate::document::{from_document, to_document, Collection};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::store::DocumentStore;
use booking_models::{NewReview, Review, UpdateReview};
use std::sync::Arc;

#[derive(Clone)]
pub struct ReviewRepository {
    store: Arc<dyn DocumentStore>,
    ids: Arc<IdGenerator>,
}

impl ReviewRepository {
    pub fn new(store: Arc<dyn DocumentStore>, ids: Arc<IdGenerator>) -> Self {
        Self { store, ids }
    }

    pub async fn list(&self) -> Result<Vec<Review>> {
        self.store
            .list(Collection::Reviews)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }

    pub async fn create(&self, new_review: NewReview) -> Result<Review> {
        let review = new_review.into_review(self.ids.next_id());
        self.store
            .insert(Collection::Reviews, to_document(&review)?)
            .await?;

        Ok(review)
    }

    pub async fn update(&self, id: &str, update: &UpdateReview) -> Result<bool> {
        self.store
            .update_by_id(Collection::Reviews, id, to_document(update)?)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        self.store.delete_by_id(Collection::Reviews, id).await
    }
}
