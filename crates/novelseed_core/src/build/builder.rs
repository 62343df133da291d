//! Project model builder.
//!
//! # Responsibility
//! - Aggregate the walker's visit events into the nested project model.
//! - Apply label normalization and the default scene status.
//! - Provide the part-suppression pass as a separate model rewrite.
//!
//! # Invariants
//! - Event order is preserved verbatim into every model list.
//! - A chapter or scene event without an enclosing container is a
//!   `MalformedTreeError`; unreachable with the shipped walker, but the
//!   contract is checked rather than assumed.

use crate::build::walk::VisitEvent;
use crate::model::project::{Chapter, Entity, Part, ProjectModel, Scene, SceneStatus, Subtype};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("literal whitespace pattern"));

pub type BuildResult<T> = Result<T, MalformedTreeError>;

/// Internal consistency failure of the visit-event stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedTreeError {
    /// A chapter event arrived before any part was opened.
    ChapterOutsidePart { label: String },
    /// A scene event arrived before any chapter was opened.
    SceneOutsideChapter { label: String },
}

impl Display for MalformedTreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChapterOutsidePart { label } => {
                write!(f, "chapter `{label}` arrived with no enclosing part")
            }
            Self::SceneOutsideChapter { label } => {
                write!(f, "scene `{label}` arrived with no enclosing chapter")
            }
        }
    }
}

impl Error for MalformedTreeError {}

/// Collapses whitespace runs in an outline label into single spaces.
///
/// Mind-map labels regularly contain manual line breaks; titles must not.
pub fn normalize_label(label: &str) -> String {
    WHITESPACE_RUN.replace_all(label.trim(), " ").into_owned()
}

/// Aggregates a visit-event stream into a project model.
pub fn build_model<I>(events: I) -> BuildResult<ProjectModel>
where
    I: IntoIterator<Item = VisitEvent>,
{
    let mut model = ProjectModel::default();
    for event in events {
        match event {
            VisitEvent::Project { label, note } => {
                model.title = normalize_label(&label);
                model.description = note;
            }
            VisitEvent::EnterPart {
                label,
                note,
                subtype,
            } => {
                model.parts.push(Part {
                    title: normalize_label(&label),
                    description: note,
                    subtype,
                    suppressed: false,
                    chapters: Vec::new(),
                });
            }
            VisitEvent::EnterChapter {
                label,
                note,
                subtype,
            } => {
                let part = model.parts.last_mut().ok_or_else(|| {
                    MalformedTreeError::ChapterOutsidePart {
                        label: label.clone(),
                    }
                })?;
                part.chapters.push(Chapter {
                    title: normalize_label(&label),
                    description: note,
                    subtype,
                    scenes: Vec::new(),
                });
            }
            VisitEvent::Scene {
                label,
                note,
                subtype,
            } => {
                let chapter = model
                    .parts
                    .last_mut()
                    .and_then(|part| part.chapters.last_mut())
                    .ok_or_else(|| MalformedTreeError::SceneOutsideChapter {
                        label: label.clone(),
                    })?;
                chapter.scenes.push(Scene {
                    title: normalize_label(&label),
                    description: note,
                    subtype,
                    status: SceneStatus::Outline,
                });
            }
            VisitEvent::Entity {
                collection,
                label,
                note,
            } => {
                model.collection_mut(collection).push(Entity {
                    title: normalize_label(&label),
                    description: note,
                });
            }
        }
    }
    Ok(model)
}

/// Marks every normal-subtype part as suppressed.
///
/// The writer hoists the chapters of suppressed parts to the top level;
/// the chapters themselves stay attached to their part record so the
/// model keeps one shape either way.
pub fn mark_suppressed_parts(model: &mut ProjectModel) {
    for part in &mut model.parts {
        part.suppressed = part.subtype == Subtype::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::{build_model, mark_suppressed_parts, normalize_label, MalformedTreeError};
    use crate::build::walk::VisitEvent;
    use crate::model::project::{SceneStatus, Subtype};

    fn project_event() -> VisitEvent {
        VisitEvent::Project {
            label: "Novel".to_string(),
            note: None,
        }
    }

    #[test]
    fn normalize_label_collapses_whitespace() {
        assert_eq!(normalize_label("  Act\nOne  "), "Act One");
        assert_eq!(normalize_label("Act \t I"), "Act I");
        assert_eq!(normalize_label(""), "");
    }

    #[test]
    fn builds_nested_structure_with_outline_status() {
        let model = build_model(vec![
            project_event(),
            VisitEvent::EnterPart {
                label: "Act I".to_string(),
                note: None,
                subtype: Subtype::Normal,
            },
            VisitEvent::EnterChapter {
                label: "Ch1".to_string(),
                note: Some("opening".to_string()),
                subtype: Subtype::Normal,
            },
            VisitEvent::Scene {
                label: "S1".to_string(),
                note: None,
                subtype: Subtype::Normal,
            },
        ])
        .expect("well-formed stream should build");
        assert_eq!(model.title, "Novel");
        assert_eq!(model.parts.len(), 1);
        let chapter = &model.parts[0].chapters[0];
        assert_eq!(chapter.description.as_deref(), Some("opening"));
        assert_eq!(chapter.scenes[0].status, SceneStatus::Outline);
    }

    #[test]
    fn chapter_without_part_is_malformed() {
        let err = build_model(vec![
            project_event(),
            VisitEvent::EnterChapter {
                label: "orphan".to_string(),
                note: None,
                subtype: Subtype::Normal,
            },
        ])
        .expect_err("chapter without part must fail");
        assert_eq!(
            err,
            MalformedTreeError::ChapterOutsidePart {
                label: "orphan".to_string()
            }
        );
    }

    #[test]
    fn scene_without_chapter_is_malformed() {
        let err = build_model(vec![
            project_event(),
            VisitEvent::EnterPart {
                label: "P".to_string(),
                note: None,
                subtype: Subtype::Normal,
            },
            VisitEvent::Scene {
                label: "orphan".to_string(),
                note: None,
                subtype: Subtype::Normal,
            },
        ])
        .expect_err("scene without chapter must fail");
        assert!(matches!(
            err,
            MalformedTreeError::SceneOutsideChapter { label } if label == "orphan"
        ));
    }

    #[test]
    fn suppression_pass_marks_only_normal_parts() {
        let mut model = build_model(vec![
            project_event(),
            VisitEvent::EnterPart {
                label: "Normal".to_string(),
                note: None,
                subtype: Subtype::Normal,
            },
            VisitEvent::EnterPart {
                label: "Background".to_string(),
                note: None,
                subtype: Subtype::Notes,
            },
        ])
        .expect("stream should build");
        mark_suppressed_parts(&mut model);
        assert!(model.parts[0].suppressed);
        assert!(!model.parts[1].suppressed);
    }
}
