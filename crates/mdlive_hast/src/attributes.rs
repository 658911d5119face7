use serde::Serialize;
use serde_json::{Map, Value};

/// Attribute map of an element node.
///
/// Attributes are carried through to the view layer untouched, except for
/// the class list (`className`), which the renderer inspects to recognize
/// math and code nodes. Parsers emit the class list as an array of
/// strings; a bare-string `className` never occurs on this boundary
/// (callers normalizing raw HTML must pre-split).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Build from the `properties` value of a raw hast node. Anything
    /// other than a JSON object yields an empty attribute map.
    pub(crate) fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Object(map)) => Self(map.clone()),
            _ => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Entries of the `className` attribute, in order.
    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.0
            .get("className")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.class_list().any(|class| class == name)
    }

    pub fn first_class(&self) -> Option<&str> {
        self.class_list().next()
    }
}
