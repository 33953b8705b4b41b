use serde::Deserialize;
use serde_json::{Map, Value};

/// One language's text tree, as loaded from `translations/<code>.json`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    root: Map<String, Value>,
}

impl Translations {
    /// Parses a translation file. The root has to be a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn resolve(&self, key_path: &str) -> Option<&str> {
        resolve_key(&self.root, key_path)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

/// Walks a dot-delimited key path such as `nav.home`.
///
/// Every step has to land on an object holding the next segment, and the
/// last one on a string. Anything else yields `None`.
pub fn resolve_key<'a>(root: &'a Map<String, Value>, key_path: &str) -> Option<&'a str> {
    let mut segments = key_path.split('.');
    let mut node = root.get(segments.next()?)?;
    for segment in segments {
        node = node.as_object()?.get(segment)?;
    }
    node.as_str()
}
