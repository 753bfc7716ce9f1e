use crate::value::NumberOrText;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A stored flight booking. Bookings are append-only: they are created,
/// listed and deleted, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    // Bookings written before ids were assigned have none
    #[serde(default)]
    pub id: String,

    // Traveller identity
    pub full_name: String,
    pub passport_number: String,
    pub nationality: String,
    pub contact_number: String,

    // Itinerary
    pub departure_city: String,
    pub destination_city: String,
    pub departure_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub passengers: NumberOrText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Booking form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[validate(length(min = 1))]
    pub full_name: String,

    #[validate(length(min = 1))]
    pub passport_number: String,

    #[validate(length(min = 1))]
    pub nationality: String,

    #[validate(length(min = 1))]
    pub contact_number: String,

    #[validate(length(min = 1))]
    pub departure_city: String,

    #[validate(length(min = 1))]
    pub destination_city: String,

    #[validate(length(min = 1))]
    pub departure_date: String,

    pub return_date: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub passengers: NumberOrText,

    pub special_requests: Option<String>,
}

impl NewBooking {
    /// Stamp the submission with its store id and creation time.
    ///
    /// Optional fields left empty by the form are dropped.
    pub fn into_booking(self, id: String, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id,
            full_name: self.full_name,
            passport_number: self.passport_number,
            nationality: self.nationality,
            contact_number: self.contact_number,
            departure_city: self.departure_city,
            destination_city: self.destination_city,
            departure_date: self.departure_date,
            return_date: non_empty(self.return_date),
            passengers: self.passengers,
            special_requests: non_empty(self.special_requests),
            created_at,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn not_blank(value: &NumberOrText) -> Result<(), ValidationError> {
    if value.is_blank() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
