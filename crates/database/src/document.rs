use crate::error::{Result, StoreError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A stored record: one JSON object.
pub type Document = Map<String, Value>;

/// Field every document is addressed by.
pub const ID_FIELD: &str = "id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Bookings,
    Destinations,
    Reviews,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Bookings,
        Collection::Destinations,
        Collection::Reviews,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Bookings => "bookings",
            Collection::Destinations => "destinations",
            Collection::Reviews => "reviews",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidDocument(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

pub fn from_document<T: DeserializeOwned>(document: Document) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(document))?)
}

/// String form of a document id. Numeric and string ids both address
/// records through the same path segment.
pub fn document_id(document: &Document) -> Option<String> {
    match document.get(ID_FIELD)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Shallow merge of `patch` onto `target`. Top-level fields in the patch
/// replace the stored ones; everything else is kept. The id never changes.
pub fn merge(target: &mut Document, patch: Document) {
    for (key, value) in patch {
        if key == ID_FIELD {
            continue;
        }
        target.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_merge_is_shallow_and_keeps_id() {
        let mut target = doc(json!({ "id": 7, "title": "Makkah", "price": 900 }));
        merge(&mut target, doc(json!({ "id": 8, "price": 1000 })));

        assert_eq!(Value::Object(target), json!({ "id": 7, "title": "Makkah", "price": 1000 }));
    }

    #[test]
    fn test_document_id_forms() {
        assert_eq!(document_id(&doc(json!({ "id": 17 }))), Some("17".to_string()));
        assert_eq!(document_id(&doc(json!({ "id": "abc" }))), Some("abc".to_string()));
        assert_eq!(document_id(&doc(json!({ "title": "x" }))), None);
    }
}
