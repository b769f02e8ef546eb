//! Translation dictionaries and dot-path key resolution.

use crate::i18n::LoadError;
use serde_json::{Map, Value};

/// One language's full text catalog: a tree of string-keyed mappings whose
/// leaves are strings.
///
/// A dictionary is scoped to one load cycle and is passed by reference into
/// the DOM pass; nothing keeps it alive globally.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationDictionary {
    root: Map<String, Value>,
}

impl TranslationDictionary {
    /// Parse a dictionary document. The top level must be a JSON object.
    ///
    /// `lang` is only used to label the error.
    pub fn parse(lang: &str, body: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(body).map_err(|source| LoadError::Malformed {
            lang: lang.to_string(),
            source,
        })?;

        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(LoadError::NotAMapping {
                lang: lang.to_string(),
            }),
        }
    }

    /// Resolve a dot-delimited key (e.g. `hero.headline`) to a leaf string.
    ///
    /// Returns `None` when a segment is absent, when a non-mapping is hit
    /// before the path is exhausted, or when the path ends on something that
    /// is not a string.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut node = self.root.get(first)?;

        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }

        node.as_str()
    }

    /// Number of top-level sections.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl From<Map<String, Value>> for TranslationDictionary {
    fn from(root: Map<String, Value>) -> Self {
        Self { root }
    }
}
