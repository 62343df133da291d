//! Conversion options.
//!
//! # Responsibility
//! - Carry the recognized configuration surface through the pipeline.
//!
//! # Invariants
//! - Every switch has a default; an empty configuration converts the full
//!   outline with the builtin icon names.

use crate::classify::IconMap;
use serde::Deserialize;

/// Options recognized by the conversion engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Elide part containers that carry no notes/todo icon; their chapters
    /// are hoisted to the top level in the output.
    pub suppress_normal_parts: bool,
    /// Emit the novel structure (parts, chapters, scenes).
    pub export_scenes: bool,
    /// Emit main and minor characters.
    pub export_characters: bool,
    /// Emit locations.
    pub export_locations: bool,
    /// Emit items.
    pub export_items: bool,
    /// Raw icon names recognized in the outline.
    pub icons: IconMap,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            suppress_normal_parts: false,
            export_scenes: true,
            export_characters: true,
            export_locations: true,
            export_items: true,
            icons: IconMap::default(),
        }
    }
}
