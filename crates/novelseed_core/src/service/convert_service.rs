//! Conversion pipeline facade.
//!
//! # Responsibility
//! - Run the whole conversion as sequential phases with fast-fail error
//!   propagation: no phase retries, no rollback of completed phases.
//! - Map every phase failure into one caller-facing error type.
//!
//! # Invariants
//! - Nothing is written before the backup phase has secured the output
//!   path.
//! - Artifacts created before a write failure stay in place.

use crate::build::builder::{build_model, mark_suppressed_parts, MalformedTreeError};
use crate::build::walk::walk_outline;
use crate::config::ConvertOptions;
use crate::model::outline::OutlineNode;
use crate::model::project::ProjectModel;
use crate::output::backup::{prepare_output_location, BackupError};
use crate::output::writer::write_project;
use crate::store::dir_store::DirectoryStore;
use crate::store::{ProjectStore, StoreError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors from the conversion pipeline.
#[derive(Debug)]
pub enum ConvertError {
    /// Outline source file missing or unreadable.
    Input { path: PathBuf, source: io::Error },
    /// Outline source file is not a valid serialized outline tree.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Internal consistency check tripped while building the model.
    MalformedTree(MalformedTreeError),
    /// Backing up the existing output location failed.
    Backup(BackupError),
    /// The target-format store rejected a creation call.
    Write(StoreError),
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input { path, source } => {
                write!(f, "can not read outline `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "can not parse outline `{}`: {source}", path.display())
            }
            Self::MalformedTree(err) => write!(f, "malformed outline tree: {err}"),
            Self::Backup(err) => write!(f, "{err}"),
            Self::Write(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::MalformedTree(err) => Some(err),
            Self::Backup(err) => Some(err),
            Self::Write(err) => Some(err),
        }
    }
}

impl From<MalformedTreeError> for ConvertError {
    fn from(value: MalformedTreeError) -> Self {
        Self::MalformedTree(value)
    }
}

impl From<BackupError> for ConvertError {
    fn from(value: BackupError) -> Self {
        Self::Backup(value)
    }
}

impl From<StoreError> for ConvertError {
    fn from(value: StoreError) -> Self {
        Self::Write(value)
    }
}

/// Summary of one successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    /// Project directory that was written.
    pub output_path: PathBuf,
    /// Where pre-existing output content was moved, if any.
    pub backup_path: Option<PathBuf>,
    pub chapter_count: usize,
    pub scene_count: usize,
    pub entity_count: usize,
}

/// Default output location: the source path with a `.novel` extension.
pub fn default_output_path(source: &Path) -> PathBuf {
    source.with_extension("novel")
}

/// Conversion pipeline with fixed options.
pub struct ConvertService {
    options: ConvertOptions,
}

impl ConvertService {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Reads and deserializes an outline tree from a JSON file.
    pub fn load_outline(path: &Path) -> ConvertResult<OutlineNode> {
        let body = fs::read_to_string(path).map_err(|source| ConvertError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| ConvertError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the project model for an outline tree, without touching the
    /// filesystem.
    pub fn build_project(&self, root: &OutlineNode) -> ConvertResult<ProjectModel> {
        let events = walk_outline(root, &self.options);
        let mut model = build_model(events)?;
        if self.options.suppress_normal_parts {
            mark_suppressed_parts(&mut model);
        }
        Ok(model)
    }

    /// Converts an outline file into a project directory.
    pub fn convert_file(&self, source: &Path, output: &Path) -> ConvertResult<ConvertOutcome> {
        let root = Self::load_outline(source)?;
        self.convert_tree(&root, output)
    }

    /// Converts an in-memory outline tree into a project directory.
    pub fn convert_tree(&self, root: &OutlineNode, output: &Path) -> ConvertResult<ConvertOutcome> {
        let model = self.build_project(root)?;
        info!(
            "event=convert_start module=service status=ok output={} chapters={} scenes={} entities={}",
            output.display(),
            model.chapter_count(),
            model.scene_count(),
            model.entity_count()
        );

        let prepared = prepare_output_location(output)?;
        if let Some(backup) = &prepared.backup {
            info!(
                "event=backup_saved module=service status=ok backup={}",
                backup.display()
            );
        }

        let mut store =
            DirectoryStore::create(output, model.title.clone(), model.description.clone())?;
        if let Err(err) = write_project(&model, &mut store) {
            error!("event=write_aborted module=service status=error error={err}");
            return Err(err.into());
        }

        info!(
            "event=convert_done module=service status=ok output={}",
            output.display()
        );
        Ok(ConvertOutcome {
            output_path: prepared.path,
            backup_path: prepared.backup,
            chapter_count: model.chapter_count(),
            scene_count: model.scene_count(),
            entity_count: model.entity_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::default_output_path;
    use std::path::{Path, PathBuf};

    #[test]
    fn default_output_replaces_the_extension() {
        assert_eq!(
            default_output_path(Path::new("drafts/story.json")),
            PathBuf::from("drafts/story.novel")
        );
        assert_eq!(
            default_output_path(Path::new("story")),
            PathBuf::from("story.novel")
        );
    }
}
