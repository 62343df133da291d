//! Backup of a pre-existing output location.
//!
//! # Responsibility
//! - Rename an existing output location to a collision-free backup name so
//!   the original content is never overwritten or lost.
//!
//! # Invariants
//! - After a successful call the output path does not exist.
//! - The backup name never collides with an existing path; probing is a
//!   linear scan over numeric tags.
//! - A locked location (open in the target application) is refused before
//!   any rename.

use std::error::Error;
use std::ffi::OsString;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix appended to the output path for the first backup candidate.
pub const BACKUP_SUFFIX: &str = ".bak";
/// Marker file the target application leaves in an open project.
pub const LOCK_FILE_NAME: &str = "project.lock";

pub type BackupResult<T> = Result<T, BackupError>;

/// Errors while preparing the output location.
#[derive(Debug)]
pub enum BackupError {
    /// The existing location contains a lock file; the project is open
    /// elsewhere.
    LocationLocked(PathBuf),
    /// The filesystem refused the backup rename.
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

impl Display for BackupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocationLocked(path) => write!(
                f,
                "output location `{}` is locked; close the project and retry",
                path.display()
            ),
            Self::Rename { from, to, source } => write!(
                f,
                "can not back up `{}` to `{}`: {source}",
                from.display(),
                to.display()
            ),
        }
    }
}

impl Error for BackupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::LocationLocked(_) => None,
            Self::Rename { source, .. } => Some(source),
        }
    }
}

/// Outcome of [`prepare_output_location`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedLocation {
    /// The now-free output path, identical to the requested one.
    pub path: PathBuf,
    /// Where pre-existing content was moved, if there was any.
    pub backup: Option<PathBuf>,
}

/// Makes the output path available, backing up pre-existing content.
///
/// Returns the effective output path plus the backup location, if a
/// rename happened. Rename failures are fatal for the run and propagate.
pub fn prepare_output_location(path: &Path) -> BackupResult<PreparedLocation> {
    if !path.exists() {
        return Ok(PreparedLocation {
            path: path.to_path_buf(),
            backup: None,
        });
    }
    if path.is_dir() && path.join(LOCK_FILE_NAME).exists() {
        return Err(BackupError::LocationLocked(path.to_path_buf()));
    }

    let mut tag = 0u32;
    let backup = loop {
        let candidate = backup_candidate(path, tag);
        if !candidate.exists() {
            break candidate;
        }
        tag += 1;
    };
    fs::rename(path, &backup).map_err(|source| BackupError::Rename {
        from: path.to_path_buf(),
        to: backup.clone(),
        source,
    })?;
    Ok(PreparedLocation {
        path: path.to_path_buf(),
        backup: Some(backup),
    })
}

/// Backup name for the given probe tag: `.bak`, then `.bak1`, `.bak2`, …
fn backup_candidate(path: &Path, tag: u32) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    if tag > 0 {
        name.push(tag.to_string());
    }
    PathBuf::from(name)
}
