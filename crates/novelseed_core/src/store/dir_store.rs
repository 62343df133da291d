//! Directory-backed project store.
//!
//! # Responsibility
//! - Realize the creation protocol as a project directory: a JSON manifest
//!   listing every artifact in creation order, plus one content file per
//!   item.
//!
//! # Invariants
//! - The manifest's `items` array order equals creation order.
//! - Every item (not group) has a content file under `content/`.
//! - Nothing is written to the manifest path until `finish`.

use crate::model::project::{CollectionKind, SceneStatus, Subtype};
use crate::store::{ItemHandle, ItemKind, ItemMeta, ProjectStore, StoreError, StoreResult};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Manifest file name inside the project directory.
pub const MANIFEST_FILE: &str = "project.json";
/// Subdirectory holding one content file per item.
pub const CONTENT_DIR: &str = "content";

const MANIFEST_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct Manifest {
    format_version: u32,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    items: Vec<ManifestEntry>,
}

#[derive(Debug, Serialize)]
struct ManifestEntry {
    handle: ItemHandle,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<ItemHandle>,
    kind: EntryKind,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtype: Option<Subtype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<SceneStatus>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum EntryKind {
    Group,
    Part,
    Chapter,
    Scene,
    MainCharacter,
    MinorCharacter,
    Location,
    Item,
}

impl From<ItemKind> for EntryKind {
    fn from(value: ItemKind) -> Self {
        match value {
            ItemKind::Part => Self::Part,
            ItemKind::Chapter => Self::Chapter,
            ItemKind::Scene => Self::Scene,
            ItemKind::MainCharacter => Self::MainCharacter,
            ItemKind::MinorCharacter => Self::MinorCharacter,
            ItemKind::Location => Self::Location,
            ItemKind::Item => Self::Item,
        }
    }
}

/// Project store writing a directory of manifest plus content files.
pub struct DirectoryStore {
    root: PathBuf,
    manifest: Manifest,
    handles: HashSet<ItemHandle>,
}

impl DirectoryStore {
    /// Creates the project directory skeleton and an empty manifest.
    pub fn create(
        root: &Path,
        title: impl Into<String>,
        description: Option<String>,
    ) -> StoreResult<Self> {
        let content_dir = root.join(CONTENT_DIR);
        fs::create_dir_all(&content_dir).map_err(|source| StoreError::Io {
            path: content_dir,
            source,
        })?;
        Ok(Self {
            root: root.to_path_buf(),
            manifest: Manifest {
                format_version: MANIFEST_FORMAT_VERSION,
                title: title.into(),
                description,
                items: Vec::new(),
            },
            handles: HashSet::new(),
        })
    }

    /// Project directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn write_content_file(
        &self,
        handle: ItemHandle,
        title: &str,
        description: Option<&str>,
    ) -> StoreResult<()> {
        let path = self.root.join(CONTENT_DIR).join(format!("{handle}.md"));
        let mut body = format!("# {title}\n");
        if let Some(description) = description {
            body.push('\n');
            body.push_str(description);
            if !description.ends_with('\n') {
                body.push('\n');
            }
        }
        write_file(&path, &body)
    }
}

impl ProjectStore for DirectoryStore {
    fn create_group(&mut self, kind: CollectionKind) -> StoreResult<ItemHandle> {
        let handle = Uuid::new_v4();
        self.manifest.items.push(ManifestEntry {
            handle,
            parent: None,
            kind: EntryKind::Group,
            title: kind.label().to_string(),
            subtype: None,
            status: None,
        });
        self.handles.insert(handle);
        Ok(handle)
    }

    fn create_item(
        &mut self,
        parent: Option<ItemHandle>,
        meta: ItemMeta,
    ) -> StoreResult<ItemHandle> {
        if let Some(parent) = parent {
            if !self.handles.contains(&parent) {
                return Err(StoreError::UnknownParent(parent));
            }
        }
        let handle = Uuid::new_v4();
        self.write_content_file(handle, &meta.title, meta.description.as_deref())?;
        self.manifest.items.push(ManifestEntry {
            handle,
            parent,
            kind: meta.kind.into(),
            title: meta.title,
            subtype: meta.subtype,
            status: meta.status,
        });
        self.handles.insert(handle);
        Ok(handle)
    }

    fn finish(&mut self) -> StoreResult<()> {
        let mut body = serde_json::to_string_pretty(&self.manifest)?;
        body.push('\n');
        write_file(&self.root.join(MANIFEST_FILE), &body)
    }
}

fn write_file(path: &Path, body: &str) -> StoreResult<()> {
    fs::write(path, body).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}
