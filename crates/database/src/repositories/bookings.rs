use crate::document::{from_document, to_document, Collection};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::store::DocumentStore;
use booking_models::{Booking, NewBooking};
use chrono::Utc;
use std::sync::Arc;

#[derive(Clone)]
pub struct BookingRepository {
    store: Arc<dyn DocumentStore>,
    ids: Arc<IdGenerator>,
}

impl BookingRepository {
    pub fn new(store: Arc<dyn DocumentStore>, ids: Arc<IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// All bookings, newest first
    pub async fn list(&self) -> Result<Vec<Booking>> {
        let mut bookings = self
            .store
            .list(Collection::Bookings)
            .await?
            .into_iter()
            .map(from_document::<Booking>)
            .collect::<Result<Vec<_>>>()?;

        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    /// Store a new booking with a fresh id and `createdAt`
    pub async fn create(&self, new_booking: NewBooking) -> Result<Booking> {
        let booking = new_booking.into_booking(self.ids.next_uuid(), Utc::now());
        self.store
            .insert(Collection::Bookings, to_document(&booking)?)
            .await?;

        Ok(booking)
    }

    /// Delete a booking; `false` if it did not exist
    pub async fn delete(&self, id: &str) -> Result<bool> {
        self.store.delete_by_id(Collection::Bookings, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::JsonFileStore;
    use booking_models::NumberOrText;
    use chrono::{Duration, TimeZone};

    fn store() -> Arc<dyn DocumentStore> {
        let path = std::env::temp_dir()
            .join(format!("booking-repo-{}", uuid::Uuid::new_v4()))
            .join("bookings.json");
        Arc::new(JsonFileStore::new(path))
    }

    fn new_booking(name: &str) -> NewBooking {
        NewBooking {
            full_name: name.to_string(),
            passport_number: "P0000001".to_string(),
            nationality: "Malaysian".to_string(),
            contact_number: "+60123456789".to_string(),
            departure_city: "Kuala Lumpur".to_string(),
            destination_city: "Madinah".to_string(),
            departure_date: "2026-03-10".to_string(),
            return_date: Some("2026-03-24".to_string()),
            passengers: NumberOrText::from(3),
            special_requests: None,
        }
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = store();
        let repo = BookingRepository::new(store.clone(), Arc::new(IdGenerator::new()));

        let t1 = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
        let t2 = t1 + Duration::minutes(5);
        let t3 = t2 + Duration::hours(2);

        // Insert out of order straight through the store
        for (id, created_at) in [("b2", t2), ("b3", t3), ("b1", t1)] {
            let booking = new_booking(id).into_booking(id.to_string(), created_at);
            store
                .insert(Collection::Bookings, to_document(&booking).unwrap())
                .await
                .unwrap();
        }

        let ids: Vec<_> = repo.list().await.unwrap().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["b3", "b2", "b1"]);
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let repo = BookingRepository::new(store(), Arc::new(IdGenerator::new()));
        let before = Utc::now();

        let booking = repo.create(new_booking("Yusuf Ali")).await.unwrap();

        assert!(!booking.id.is_empty());
        assert!(booking.created_at >= before);
        assert_eq!(repo.list().await.unwrap(), vec![booking]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = BookingRepository::new(store(), Arc::new(IdGenerator::new()));
        let booking = repo.create(new_booking("Maryam")).await.unwrap();

        assert!(repo.delete(&booking.id).await.unwrap());
        assert!(!repo.delete(&booking.id).await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }
}
