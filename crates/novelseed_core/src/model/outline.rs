//! Outline input tree.
//!
//! # Responsibility
//! - Define the node shape the conversion engine consumes.
//! - Name the fixed set of icon identifiers the engine recognizes.
//!
//! # Invariants
//! - Every node has a label; an empty string is a valid label.
//! - `icons` carries raw icon names as they appear in the outline file;
//!   resolution to `IconId` happens in the classifier, and unknown names
//!   are ignored there.

use serde::{Deserialize, Serialize};

/// Fixed set of icon identifiers with conversion semantics.
///
/// Raw icon names are mapped onto this set by [`crate::classify::IconMap`];
/// names outside the set carry no meaning for the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconId {
    /// Marks a level-1 node whose children are the main characters.
    MainCharacters,
    /// Marks a level-1 node whose children are the minor characters.
    MinorCharacters,
    /// Marks a level-1 node whose children are the locations.
    Locations,
    /// Marks a level-1 node whose children are the items.
    Items,
    /// Switches the node and its descendants to the notes subtype.
    Notes,
    /// Switches the node and its descendants to the todo subtype.
    Todo,
}

/// One node of the outline tree.
///
/// The tree is rooted at a single synthetic root whose direct children are
/// the level-1 nodes; the root's own label and note become the project
/// title and description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    /// Node label, mapped to the artifact title.
    pub label: String,
    /// Optional long-text annotation, mapped to the artifact description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Raw icon names in outline order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub icons: Vec<String>,
    /// Child nodes in outline order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Creates a leaf node with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OutlineNode;

    #[test]
    fn deserializes_minimal_node() {
        let node: OutlineNode = serde_json::from_str(r#"{"label": "Act I"}"#)
            .expect("minimal node should deserialize");
        assert_eq!(node.label, "Act I");
        assert_eq!(node.note, None);
        assert!(node.icons.is_empty());
        assert!(node.children.is_empty());
    }

    #[test]
    fn deserializes_nested_tree_in_order() {
        let node: OutlineNode = serde_json::from_str(
            r#"{
                "label": "root",
                "children": [
                    {"label": "a", "icons": ["info"]},
                    {"label": "b", "note": "second"}
                ]
            }"#,
        )
        .expect("nested tree should deserialize");
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].label, "a");
        assert_eq!(node.children[0].icons, vec!["info".to_string()]);
        assert_eq!(node.children[1].note.as_deref(), Some("second"));
    }
}
