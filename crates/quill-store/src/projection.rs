use serde_json::Value;

use crate::document::{lookup_path, Document, ID_FIELD};

/// Which fields a read operation returns.
///
/// Paths are dotted (`author.name` projects a nested field). An `Include`
/// projection always carries `_id` when the document has one; list and edit
/// views depend on the identifier for links even when they name only a
/// handful of content fields.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    /// The whole document.
    All,
    /// Only the named paths (plus `_id`).
    Include(Vec<String>),
    /// The whole document minus the named paths.
    Exclude(Vec<String>),
}

impl Projection {
    /// Include-projection over the given paths.
    pub fn include<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Include(paths.into_iter().map(Into::into).collect())
    }

    /// Exclude-projection over the given paths.
    pub fn exclude<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exclude(paths.into_iter().map(Into::into).collect())
    }

    /// Shape a stored document according to this projection.
    pub fn apply(&self, document: &Document) -> Document {
        match self {
            Self::All => document.clone(),
            Self::Include(paths) => {
                let mut shaped = Document::new();
                if let Some(id) = document.get(ID_FIELD) {
                    shaped.insert(ID_FIELD.into(), id.clone());
                }
                for path in paths {
                    if let Some(value) = lookup_path(document, path) {
                        insert_path(&mut shaped, path, value.clone());
                    }
                }
                shaped
            }
            Self::Exclude(paths) => {
                let mut shaped = document.clone();
                for path in paths {
                    remove_path(&mut shaped, path);
                }
                shaped
            }
        }
    }
}

/// Insert a value at a dotted path, creating intermediate objects.
fn insert_path(document: &mut Document, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            document.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = document
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Document::new()));
            if let Value::Object(nested) = entry {
                insert_path(nested, rest, value);
            }
        }
    }
}

/// Remove the value at a dotted path, if present.
fn remove_path(document: &mut Document, path: &str) {
    match path.split_once('.') {
        None => {
            document.remove(path);
        }
        Some((head, rest)) => {
            if let Some(Value::Object(nested)) = document.get_mut(head) {
                remove_path(nested, rest);
            }
        }
    }
}
