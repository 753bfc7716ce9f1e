use crate::document::{from_document, to_document, Collection};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::store::DocumentStore;
use booking_models::{Destination, NewDestination, UpdateDestination};
use std::sync::Arc;

#[derive(Clone)]
pub struct DestinationRepository {
    store: Arc<dyn DocumentStore>,
    ids: Arc<IdGenerator>,
}

impl DestinationRepository {
    pub fn new(store: Arc<dyn DocumentStore>, ids: Arc<IdGenerator>) -> Self {
        Self { store, ids }
    }

    pub async fn list(&self) -> Result<Vec<Destination>> {
        self.store
            .list(Collection::Destinations)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }

    pub async fn create(&self, new_destination: NewDestination) -> Result<Destination> {
        let destination = new_destination.into_destination(self.ids.next_id());
        self.store
            .insert(Collection::Destinations, to_document(&destination)?)
            .await?;

        Ok(destination)
    }

    /// Replace the fields present in `update`; `false` if the id is unknown
    pub async fn update(&self, id: &str, update: &UpdateDestination) -> Result<bool> {
        self.store
            .update_by_id(Collection::Destinations, id, to_document(update)?)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        self.store.delete_by_id(Collection::Destinations, id).await
    }
}
