//! Target-format creation protocol.
//!
//! # Responsibility
//! - Define the ordered creation interface the output writer drives.
//! - Keep serialization details inside concrete store implementations.
//!
//! # Invariants
//! - Creation order is the only ordering signal a store receives; stores
//!   must preserve it.
//! - A parent handle passed to `create_item` must have been returned by an
//!   earlier call on the same store.

pub mod dir_store;

use crate::model::project::{CollectionKind, SceneStatus, Subtype};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;
use uuid::Uuid;

/// Opaque reference to a created artifact.
pub type ItemHandle = Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from target-format store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem operation failed for the given path.
    Io { path: PathBuf, source: io::Error },
    /// Manifest serialization failed.
    Manifest(serde_json::Error),
    /// Parent handle was never returned by this store.
    UnknownParent(ItemHandle),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "can not write `{}`: {source}", path.display())
            }
            Self::Manifest(err) => write!(f, "can not serialize project manifest: {err}"),
            Self::UnknownParent(handle) => write!(f, "unknown parent handle: {handle}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Manifest(err) => Some(err),
            Self::UnknownParent(_) => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Manifest(value)
    }
}

/// Artifact type passed to the store with every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Part,
    Chapter,
    Scene,
    MainCharacter,
    MinorCharacter,
    Location,
    Item,
}

impl ItemKind {
    /// Item kind of one entry of the given collection.
    pub fn for_collection(kind: CollectionKind) -> Self {
        match kind {
            CollectionKind::MainCharacters => Self::MainCharacter,
            CollectionKind::MinorCharacters => Self::MinorCharacter,
            CollectionKind::Locations => Self::Location,
            CollectionKind::Items => Self::Item,
        }
    }
}

/// Metadata fields of one created artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMeta {
    pub kind: ItemKind,
    pub title: String,
    pub description: Option<String>,
    /// Content subtype; carried for structural artifacts, `None` for
    /// entities.
    pub subtype: Option<Subtype>,
    /// Editing status; only scenes carry one.
    pub status: Option<SceneStatus>,
}

/// Ordered creation protocol of the target project format.
///
/// The writer calls this once per model node; implementations derive
/// their display order from call order alone.
pub trait ProjectStore {
    /// Creates the top-level group of one entity collection.
    fn create_group(&mut self, kind: CollectionKind) -> StoreResult<ItemHandle>;

    /// Creates one artifact, optionally below an earlier-created parent.
    fn create_item(&mut self, parent: Option<ItemHandle>, meta: ItemMeta)
        -> StoreResult<ItemHandle>;

    /// Flushes any buffered state; called once after the last creation.
    fn finish(&mut self) -> StoreResult<()>;
}
