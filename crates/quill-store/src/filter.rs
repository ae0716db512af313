use serde_json::Value;

use quill_types::DocumentId;

use crate::document::{lookup_path, Document, ID_FIELD};

/// Which documents an operation addresses.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Every document in the collection.
    All,
    /// The single document with this identifier.
    Id(DocumentId),
    /// Documents whose field at the dotted path equals the value.
    Eq(String, Value),
}

impl Filter {
    /// Field-equality filter.
    pub fn eq(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq(path.into(), value.into())
    }

    /// Whether the document satisfies this filter.
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Self::All => true,
            Self::Id(id) => {
                matches!(document.get(ID_FIELD), Some(Value::String(s)) if *s == id.to_hex())
            }
            Self::Eq(path, value) => lookup_path(document, path) == Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::to_document;
    use serde_json::json;

    #[test]
    fn all_matches_anything() {
        let doc = to_document(&json!({ "title": "x" })).unwrap();
        assert!(Filter::All.matches(&doc));
    }

    #[test]
    fn id_matches_only_its_document() {
        let id = DocumentId::generate();
        let doc = to_document(&json!({ ID_FIELD: id.to_hex() })).unwrap();
        assert!(Filter::Id(id).matches(&doc));
        assert!(!Filter::Id(DocumentId::generate()).matches(&doc));
    }

    #[test]
    fn id_does_not_match_documents_without_one() {
        let doc = to_document(&json!({ "title": "x" })).unwrap();
        assert!(!Filter::Id(DocumentId::generate()).matches(&doc));
    }

    #[test]
    fn eq_matches_dotted_paths() {
        let doc = to_document(&json!({ "author": { "name": "Ada" } })).unwrap();
        assert!(Filter::eq("author.name", "Ada").matches(&doc));
        assert!(!Filter::eq("author.name", "Grace").matches(&doc));
        assert!(!Filter::eq("author.email", "Ada").matches(&doc));
    }
}
