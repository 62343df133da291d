//! Typed project model produced by the conversion engine.
//!
//! # Responsibility
//! - Hold the ordered part/chapter/scene structure and the four entity
//!   collections in one in-memory value.
//! - Keep subtype and status vocabulary shared between model and store.
//!
//! # Invariants
//! - Every scene belongs to exactly one chapter, every chapter to exactly
//!   one part record (a suppressed part still owns its chapters; the
//!   writer hoists them at emission time).
//! - List order equals left-to-right source order of the outline tree.

use serde::{Deserialize, Serialize};

/// Content subtype derived from notes/todo icons.
///
/// Descendants inherit the nearest ancestor's subtype unless their own
/// icons override it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subtype {
    /// Regular manuscript content.
    #[default]
    Normal,
    /// Background notes, not part of the manuscript.
    Notes,
    /// Planning material still to be worked out.
    Todo,
}

/// Editing status ladder of the target format.
///
/// The converter always assigns [`SceneStatus::Outline`]; the remaining
/// rungs exist because the target format knows them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneStatus {
    #[default]
    Outline,
    Draft,
    FirstEdit,
    SecondEdit,
    Done,
}

/// The four entity collections recognized at outline level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    MainCharacters,
    MinorCharacters,
    Locations,
    Items,
}

impl CollectionKind {
    /// Emission order of the collections in the output project.
    pub const ALL: [CollectionKind; 4] = [
        CollectionKind::MainCharacters,
        CollectionKind::MinorCharacters,
        CollectionKind::Locations,
        CollectionKind::Items,
    ];

    /// Display title of the collection's group in the output project.
    pub fn label(self) -> &'static str {
        match self {
            Self::MainCharacters => "Main characters",
            Self::MinorCharacters => "Minor characters",
            Self::Locations => "Locations",
            Self::Items => "Items",
        }
    }
}

/// Character, location or item entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entity {
    pub title: String,
    pub description: Option<String>,
}

/// Level-3 outline node mapped into a chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    pub title: String,
    pub description: Option<String>,
    pub subtype: Subtype,
    pub status: SceneStatus,
}

/// Level-2 outline node grouping scenes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    pub description: Option<String>,
    pub subtype: Subtype,
    pub scenes: Vec<Scene>,
}

/// Level-1 outline node grouping chapters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Part {
    pub title: String,
    pub description: Option<String>,
    pub subtype: Subtype,
    /// When set, the writer emits the chapters at top level instead of
    /// creating a container for this part.
    pub suppressed: bool,
    pub chapters: Vec<Chapter>,
}

/// Complete in-memory project, consumed once by the output writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectModel {
    /// Project title, taken from the outline root's label.
    pub title: String,
    /// Project description, taken from the outline root's note.
    pub description: Option<String>,
    pub parts: Vec<Part>,
    pub main_characters: Vec<Entity>,
    pub minor_characters: Vec<Entity>,
    pub locations: Vec<Entity>,
    pub items: Vec<Entity>,
}

impl ProjectModel {
    /// Returns one entity collection by kind.
    pub fn collection(&self, kind: CollectionKind) -> &[Entity] {
        match kind {
            CollectionKind::MainCharacters => &self.main_characters,
            CollectionKind::MinorCharacters => &self.minor_characters,
            CollectionKind::Locations => &self.locations,
            CollectionKind::Items => &self.items,
        }
    }

    pub(crate) fn collection_mut(&mut self, kind: CollectionKind) -> &mut Vec<Entity> {
        match kind {
            CollectionKind::MainCharacters => &mut self.main_characters,
            CollectionKind::MinorCharacters => &mut self.minor_characters,
            CollectionKind::Locations => &mut self.locations,
            CollectionKind::Items => &mut self.items,
        }
    }

    /// Total number of chapters across all parts.
    pub fn chapter_count(&self) -> usize {
        self.parts.iter().map(|part| part.chapters.len()).sum()
    }

    /// Total number of scenes across all chapters.
    pub fn scene_count(&self) -> usize {
        self.parts
            .iter()
            .flat_map(|part| &part.chapters)
            .map(|chapter| chapter.scenes.len())
            .sum()
    }

    /// Total number of entities across the four collections.
    pub fn entity_count(&self) -> usize {
        CollectionKind::ALL
            .into_iter()
            .map(|kind| self.collection(kind).len())
            .sum()
    }
}
