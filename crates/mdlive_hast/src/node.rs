use serde::de::{Deserialize, Deserializer};
use serde_json::Value;

use crate::Attributes;
use crate::error::Result;

/// One node of the parsed document tree.
///
/// The tree is read once, top-down; nodes carry no parent references.
/// Child order is document reading order and must be preserved by every
/// consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text {
        value: String,
    },
    Element {
        tag_name: String,
        attributes: Attributes,
        children: Vec<Node>,
    },
    Root {
        children: Vec<Node>,
    },
    /// A node kind this model does not understand. Keeps the declared
    /// `type` tag and the raw JSON so the renderer can report it.
    Unknown {
        kind: String,
        raw: Value,
    },
}

impl Node {
    /// Build a node from a raw hast JSON value.
    ///
    /// Never fails: a node whose `type` tag is missing or unrecognized
    /// becomes [`Node::Unknown`], so one stray node cannot take down the
    /// rest of the document.
    pub fn from_value(raw: Value) -> Node {
        match raw.get("type").and_then(Value::as_str) {
            Some("text") => Node::Text {
                value: raw
                    .get("value")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            Some("element") => Node::Element {
                tag_name: raw
                    .get("tagName")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                attributes: Attributes::from_value(
                    raw.get("properties").or_else(|| raw.get("attributes")),
                ),
                children: children_from(&raw),
            },
            Some("root") => Node::Root { children: children_from(&raw) },
            kind => Node::Unknown {
                kind: kind.unwrap_or_default().to_string(),
                raw,
            },
        }
    }

    /// All descendant text, concatenated depth-first with no separator.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { value } => out.push_str(value),
            Node::Element { children, .. } | Node::Root { children } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Node::Unknown { raw, .. } => raw_text(raw, out),
        }
    }
}

/// Text extraction over a raw JSON node that never made it into the
/// typed tree. Mirrors [`Node::collect_text`]: a `text` node contributes
/// its value, anything with children contributes their concatenation.
fn raw_text(raw: &Value, out: &mut String) {
    if raw.get("type").and_then(Value::as_str) == Some("text") {
        if let Some(value) = raw.get("value").and_then(Value::as_str) {
            out.push_str(value);
        }
        return;
    }
    if let Some(children) = raw.get("children").and_then(Value::as_array) {
        for child in children {
            raw_text(child, out);
        }
    }
}

fn children_from(raw: &Value) -> Vec<Node> {
    raw.get("children")
        .and_then(Value::as_array)
        .map(|children| children.iter().cloned().map(Node::from_value).collect())
        .unwrap_or_default()
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Node::from_value(raw))
    }
}

/// Parse a JSON document into a tree.
pub fn parse_document(json: &str) -> Result<Node> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn node(value: serde_json::Value) -> Node {
        Node::from_value(value)
    }

    #[test]
    fn test_parse_text_node() {
        let actual = node(json!({"type": "text", "value": "hello"}));
        let expected = Node::Text { value: "hello".to_string() };

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_parse_element_with_children() {
        let actual = node(json!({
            "type": "element",
            "tagName": "p",
            "children": [{"type": "text", "value": "body"}]
        }));

        match actual {
            Node::Element { tag_name, attributes, children } => {
                assert_eq!(tag_name, "p");
                assert!(attributes.is_empty());
                assert_eq!(children, vec![Node::Text { value: "body".to_string() }]);
            }
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_unknown_kind_keeps_tag_and_raw() {
        let fixture = json!({"type": "comment", "value": "skip me"});
        let actual = node(fixture.clone());
        let expected = Node::Unknown { kind: "comment".to_string(), raw: fixture };

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_parse_missing_type_is_unknown() {
        let fixture = json!({"tagName": "p"});
        let actual = node(fixture.clone());
        let expected = Node::Unknown { kind: String::new(), raw: fixture };

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_unknown_child_does_not_fail_document() {
        let actual = parse_document(
            r#"{"type": "root", "children": [
                {"type": "comment", "value": "x"},
                {"type": "text", "value": "kept"}
            ]}"#,
        );

        match actual {
            Ok(Node::Root { children }) => {
                assert_eq!(children.len(), 2);
                assert_eq!(children[1], Node::Text { value: "kept".to_string() });
            }
            other => panic!("expected root, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let actual = parse_document("{not json");

        assert!(actual.is_err());
    }

    #[test]
    fn test_text_content_depth_first() {
        let fixture = node(json!({
            "type": "element",
            "tagName": "pre",
            "children": [{
                "type": "element",
                "tagName": "code",
                "children": [
                    {"type": "text", "value": "a = "},
                    {"type": "element", "tagName": "span",
                     "children": [{"type": "text", "value": "b"}]}
                ]
            }]
        }));
        let actual = fixture.text_content();
        let expected = "a = b";

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_text_content_matches_code_child() {
        // Extracting from `pre > code` equals extracting from the code
        // node directly equals concatenating its children.
        let code = json!({
            "type": "element",
            "tagName": "code",
            "children": [
                {"type": "text", "value": "x"},
                {"type": "text", "value": "y"}
            ]
        });
        let pre = node(json!({
            "type": "element",
            "tagName": "pre",
            "children": [code]
        }));
        let code = node(json!({
            "type": "element",
            "tagName": "code",
            "children": [
                {"type": "text", "value": "x"},
                {"type": "text", "value": "y"}
            ]
        }));

        assert_eq!(pre.text_content(), "xy");
        assert_eq!(code.text_content(), "xy");
    }

    #[test]
    fn test_text_content_of_unknown_walks_raw_children() {
        let fixture = node(json!({
            "type": "figure",
            "children": [{"type": "text", "value": "caption"}]
        }));
        let actual = fixture.text_content();
        let expected = "caption";

        assert_eq!(actual, expected);
    }
}
