use crate::value::NumberOrText;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: i64,
    pub title: String,
    pub price: NumberOrText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Create destination request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewDestination {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub price: NumberOrText,

    pub image: Option<String>,
}

impl NewDestination {
    pub fn into_destination(self, id: i64) -> Destination {
        Destination {
            id,
            title: self.title,
            price: self.price,
            image: self.image.filter(|i| !i.trim().is_empty()),
        }
    }
}

/// Partial update; only the fields present are replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDestination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<NumberOrText>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update: UpdateDestination =
            serde_json::from_str(r#"{"price": "950"}"#).unwrap();
        let patch = serde_json::to_value(&update).unwrap();

        assert_eq!(patch, serde_json::json!({ "price": "950" }));
    }

    #[test]
    fn test_into_destination() {
        let new_destination = NewDestination {
            title: "Madinah".to_string(),
            price: NumberOrText::from(1500),
            image: Some(String::new()),
        };
        let destination = new_destination.into_destination(42);

        assert_eq!(destination.id, 42);
        assert_eq!(destination.image, None);
    }
}
