//! Output-side phases: backup of the target location, artifact emission.
//!
//! # Responsibility
//! - Move a pre-existing output location out of the way without data loss.
//! - Drive a [`crate::store::ProjectStore`] in model order.
//!
//! # Invariants
//! - Backup completes (or fails) before the first artifact is created.
//! - The writer performs no retries and no rollback; the first store
//!   failure aborts emission.

pub mod backup;
pub mod writer;
