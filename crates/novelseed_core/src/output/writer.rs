//! Output writer.
//!
//! # Responsibility
//! - Emit one store call per model node, in model order.
//! - Hoist the chapters of suppressed parts to the top level.
//!
//! # Invariants
//! - Emission order: parts (with chapters and scenes) in model order,
//!   then the four entity collections in their fixed order.
//! - No retries and no rollback: the first store error aborts emission
//!   and artifacts created so far stay in place.

use crate::model::project::{Chapter, CollectionKind, Entity, Part, ProjectModel, Scene};
use crate::store::{ItemKind, ItemMeta, ProjectStore, StoreResult};

/// Writes the whole project model through the given store.
pub fn write_project<S: ProjectStore>(model: &ProjectModel, store: &mut S) -> StoreResult<()> {
    for part in &model.parts {
        let parent = if part.suppressed {
            None
        } else {
            Some(store.create_item(None, part_meta(part))?)
        };
        for chapter in &part.chapters {
            let chapter_handle = store.create_item(parent, chapter_meta(chapter))?;
            for scene in &chapter.scenes {
                store.create_item(Some(chapter_handle), scene_meta(scene))?;
            }
        }
    }

    for kind in CollectionKind::ALL {
        let group = store.create_group(kind)?;
        for entity in model.collection(kind) {
            store.create_item(Some(group), entity_meta(kind, entity))?;
        }
    }

    store.finish()
}

fn part_meta(part: &Part) -> ItemMeta {
    ItemMeta {
        kind: ItemKind::Part,
        title: part.title.clone(),
        description: part.description.clone(),
        subtype: Some(part.subtype),
        status: None,
    }
}

fn chapter_meta(chapter: &Chapter) -> ItemMeta {
    ItemMeta {
        kind: ItemKind::Chapter,
        title: chapter.title.clone(),
        description: chapter.description.clone(),
        subtype: Some(chapter.subtype),
        status: None,
    }
}

fn scene_meta(scene: &Scene) -> ItemMeta {
    ItemMeta {
        kind: ItemKind::Scene,
        title: scene.title.clone(),
        description: scene.description.clone(),
        subtype: Some(scene.subtype),
        status: Some(scene.status),
    }
}

fn entity_meta(kind: CollectionKind, entity: &Entity) -> ItemMeta {
    ItemMeta {
        kind: ItemKind::for_collection(kind),
        title: entity.title.clone(),
        description: entity.description.clone(),
        subtype: None,
        status: None,
    }
}
