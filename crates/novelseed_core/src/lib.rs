//! Core conversion engine for novelseed.
//!
//! Turns a three-level mind-map outline into a novel project directory:
//! parts, chapters and scenes from the tree structure, characters,
//! locations and items from icon-marked collection branches.

pub mod build;
pub mod classify;
pub mod config;
pub mod logging;
pub mod model;
pub mod output;
pub mod service;
pub mod store;

pub use build::builder::{build_model, mark_suppressed_parts, MalformedTreeError};
pub use build::walk::{walk_outline, VisitEvent};
pub use classify::{classify, Classification, IconMap};
pub use config::ConvertOptions;
pub use logging::{default_log_level, init_logging};
pub use model::outline::{IconId, OutlineNode};
pub use model::project::{
    Chapter, CollectionKind, Entity, Part, ProjectModel, Scene, SceneStatus, Subtype,
};
pub use output::backup::{prepare_output_location, BackupError, PreparedLocation};
pub use output::writer::write_project;
pub use service::convert_service::{
    default_output_path, ConvertError, ConvertOutcome, ConvertResult, ConvertService,
};
pub use store::dir_store::DirectoryStore;
pub use store::{ItemHandle, ItemKind, ItemMeta, ProjectStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
