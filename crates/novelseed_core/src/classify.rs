//! Icon classification.
//!
//! # Responsibility
//! - Resolve raw outline icon names to the fixed [`IconId`] set.
//! - Derive a node's collection marker and subtype from its icon sequence.
//!
//! # Invariants
//! - Classification is a pure function; one scan over the icon sequence.
//! - The first icon matching a collection marker wins; independently, the
//!   first icon matching a subtype wins.
//! - Unknown icon names are skipped without error.

use crate::model::outline::IconId;
use crate::model::project::{CollectionKind, Subtype};
use serde::Deserialize;

/// Mapping from raw outline icon names to the recognized identifiers.
///
/// Defaults are the FreeMind builtin icon names the conversion convention
/// grew up with; outlines using different decorations can supply their own
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconMap {
    pub main_characters: String,
    pub minor_characters: String,
    pub locations: String,
    pub items: String,
    pub notes: String,
    pub todo: String,
}

impl Default for IconMap {
    fn default() -> Self {
        Self {
            main_characters: "full-1".to_string(),
            minor_characters: "full-2".to_string(),
            locations: "gohome".to_string(),
            items: "password".to_string(),
            notes: "info".to_string(),
            todo: "list".to_string(),
        }
    }
}

impl IconMap {
    /// Resolves one raw icon name, or `None` for unrecognized names.
    pub fn resolve(&self, icon: &str) -> Option<IconId> {
        if icon == self.main_characters {
            Some(IconId::MainCharacters)
        } else if icon == self.minor_characters {
            Some(IconId::MinorCharacters)
        } else if icon == self.locations {
            Some(IconId::Locations)
        } else if icon == self.items {
            Some(IconId::Items)
        } else if icon == self.notes {
            Some(IconId::Notes)
        } else if icon == self.todo {
            Some(IconId::Todo)
        } else {
            None
        }
    }
}

/// Result of classifying one node's icon sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    /// Collection marker, meaningful at outline level 1 only.
    pub collection: Option<CollectionKind>,
    /// Subtype override; `None` means "inherit from the nearest ancestor".
    pub subtype: Option<Subtype>,
}

/// Classifies an ordered icon sequence.
pub fn classify<'a, I>(map: &IconMap, icons: I) -> Classification
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result = Classification::default();
    for icon in icons {
        let Some(id) = map.resolve(icon) else {
            continue;
        };
        match id {
            IconId::MainCharacters => {
                result.collection = result.collection.or(Some(CollectionKind::MainCharacters));
            }
            IconId::MinorCharacters => {
                result.collection = result.collection.or(Some(CollectionKind::MinorCharacters));
            }
            IconId::Locations => {
                result.collection = result.collection.or(Some(CollectionKind::Locations));
            }
            IconId::Items => {
                result.collection = result.collection.or(Some(CollectionKind::Items));
            }
            IconId::Notes => {
                result.subtype = result.subtype.or(Some(Subtype::Notes));
            }
            IconId::Todo => {
                result.subtype = result.subtype.or(Some(Subtype::Todo));
            }
        }
    }
    result
}
