// Core record types
pub mod booking;
pub mod destination;
pub mod review;
pub mod session;
pub mod value;

// Re-export commonly used types
pub use booking::{Booking, NewBooking};
pub use destination::{Destination, NewDestination, UpdateDestination};
pub use review::{NewReview, Review, UpdateReview};
pub use session::Session;
pub use value::NumberOrText;
