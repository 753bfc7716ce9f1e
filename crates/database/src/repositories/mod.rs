pub mod bookings;
pub mod destinations;
pub mod reviews;

use crate::ids::IdGenerator;
use crate::store::DocumentStore;
use std::sync::Arc;

pub use bookings::BookingRepository;
pub use destinations::DestinationRepository;
pub use reviews::ReviewRepository;

/// The three collection repositories over one store, sharing an id source.
#[derive(Clone)]
pub struct Repositories {
    pub bookings: BookingRepository,
    pub destinations: DestinationRepository,
    pub reviews: ReviewRepository,
}

impl Repositories {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let ids = Arc::new(IdGenerator::new());
        Self {
            bookings: BookingRepository::new(store.clone(), ids.clone()),
            destinations: DestinationRepository::new(store.clone(), ids.clone()),
            reviews: ReviewRepository::new(store, ids),
        }
    }
}
