//! Outline tree walker.
//!
//! # Responsibility
//! - Visit the three-level outline tree and decide each node's role from
//!   its depth and icons.
//! - Emit an ordered visit-event stream for the model builder.
//!
//! # Invariants
//! - Children are visited in source order, depth first.
//! - A collection-marked level-1 node contributes its immediate children
//!   as entities; deeper descendants are flattened away.
//! - Nodes below level 3 are not visited; their presence is not an error.
//! - Subtype inheritance is resolved here: a node's own icon wins, absence
//!   inherits the enclosing container's subtype.

use crate::classify::classify;
use crate::config::ConvertOptions;
use crate::model::outline::OutlineNode;
use crate::model::project::{CollectionKind, Subtype};

/// One step of the outline traversal, consumed by the model builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitEvent {
    /// Root node metadata; always the first event.
    Project {
        label: String,
        note: Option<String>,
    },
    /// A level-1 node without collection marker opens a part.
    EnterPart {
        label: String,
        note: Option<String>,
        subtype: Subtype,
    },
    /// A level-2 node opens a chapter in the current part.
    EnterChapter {
        label: String,
        note: Option<String>,
        subtype: Subtype,
    },
    /// A level-3 node adds a scene to the current chapter.
    Scene {
        label: String,
        note: Option<String>,
        subtype: Subtype,
    },
    /// An immediate child of a collection-marked level-1 node.
    Entity {
        collection: CollectionKind,
        label: String,
        note: Option<String>,
    },
}

/// Walks the outline tree into an ordered visit-event stream.
pub fn walk_outline(root: &OutlineNode, options: &ConvertOptions) -> Vec<VisitEvent> {
    let mut events = Vec::new();
    events.push(VisitEvent::Project {
        label: root.label.clone(),
        note: root.note.clone(),
    });

    for level1 in &root.children {
        let class = classify(&options.icons, level1.icons.iter().map(String::as_str));
        if let Some(collection) = class.collection {
            if collection_enabled(options, collection) {
                visit_collection(&mut events, level1, collection);
            }
        } else if options.export_scenes {
            visit_part(&mut events, level1, options, class.subtype.unwrap_or_default());
        }
    }

    events
}

fn collection_enabled(options: &ConvertOptions, collection: CollectionKind) -> bool {
    match collection {
        CollectionKind::MainCharacters | CollectionKind::MinorCharacters => {
            options.export_characters
        }
        CollectionKind::Locations => options.export_locations,
        CollectionKind::Items => options.export_items,
    }
}

fn visit_collection(
    events: &mut Vec<VisitEvent>,
    marker: &OutlineNode,
    collection: CollectionKind,
) {
    // Only immediate children become entities; grandchildren are ignored.
    for entry in &marker.children {
        events.push(VisitEvent::Entity {
            collection,
            label: entry.label.clone(),
            note: entry.note.clone(),
        });
    }
}

fn visit_part(
    events: &mut Vec<VisitEvent>,
    part: &OutlineNode,
    options: &ConvertOptions,
    part_subtype: Subtype,
) {
    events.push(VisitEvent::EnterPart {
        label: part.label.clone(),
        note: part.note.clone(),
        subtype: part_subtype,
    });
    for chapter in &part.children {
        let class = classify(&options.icons, chapter.icons.iter().map(String::as_str));
        let chapter_subtype = class.subtype.unwrap_or(part_subtype);
        events.push(VisitEvent::EnterChapter {
            label: chapter.label.clone(),
            note: chapter.note.clone(),
            subtype: chapter_subtype,
        });
        for scene in &chapter.children {
            let class = classify(&options.icons, scene.icons.iter().map(String::as_str));
            events.push(VisitEvent::Scene {
                label: scene.label.clone(),
                note: scene.note.clone(),
                subtype: class.subtype.unwrap_or(chapter_subtype),
            });
            // Anything below level 3 is intentionally not visited.
        }
    }
}
