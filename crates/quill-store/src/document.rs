use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use quill_types::DocumentId;

use crate::error::{StoreError, StoreResult};

/// A stored document: a JSON object keyed by field name.
pub type Document = serde_json::Map<String, Value>;

/// Field under which a document's identifier is stored.
pub const ID_FIELD: &str = "_id";

/// Convert a typed record into its stored document form.
pub fn to_document<T: Serialize>(value: &T) -> StoreResult<Document> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::Serialization(format!(
            "expected a JSON object, got {other}"
        ))),
        Err(e) => Err(StoreError::Serialization(e.to_string())),
    }
}

/// Convert a stored document back into a typed record.
pub fn from_document<T: DeserializeOwned>(document: Document) -> StoreResult<T> {
    serde_json::from_value(Value::Object(document))
        .map_err(|e| StoreError::Serialization(e.to_string()))
}

/// The document's identifier, if it carries a well-formed one.
pub fn document_id(document: &Document) -> Option<DocumentId> {
    match document.get(ID_FIELD) {
        Some(Value::String(s)) => DocumentId::from_hex(s).ok(),
        _ => None,
    }
}

/// Resolve a dotted field path (`author.name`) inside a document.
pub(crate) fn lookup_path<'a>(document: &'a Document, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = document.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        title: String,
        count: u32,
    }

    #[test]
    fn typed_roundtrip() {
        let record = Record {
            title: "hello".into(),
            count: 3,
        };
        let doc = to_document(&record).unwrap();
        assert_eq!(doc.get("title"), Some(&json!("hello")));
        let back: Record = from_document(doc).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn non_object_values_are_rejected() {
        let err = to_document(&42u32).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn document_id_parses_the_id_field() {
        let id = DocumentId::generate();
        let mut doc = Document::new();
        doc.insert(ID_FIELD.into(), json!(id.to_hex()));
        assert_eq!(document_id(&doc), Some(id));
    }

    #[test]
    fn document_id_ignores_malformed_ids() {
        let mut doc = Document::new();
        doc.insert(ID_FIELD.into(), json!("nope"));
        assert_eq!(document_id(&doc), None);
    }

    #[test]
    fn lookup_path_walks_nested_objects() {
        let doc = to_document(&json!({
            "author": { "name": "Ada", "email": "ada@example.com" }
        }))
        .unwrap();
        assert_eq!(lookup_path(&doc, "author.name"), Some(&json!("Ada")));
        assert_eq!(lookup_path(&doc, "author.missing"), None);
        assert_eq!(lookup_path(&doc, "missing.name"), None);
    }
}
