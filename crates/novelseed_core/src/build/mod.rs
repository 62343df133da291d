//! Outline traversal and project model assembly.
//!
//! # Responsibility
//! - Walk the three-level outline tree into an ordered visit-event stream.
//! - Aggregate the stream into the typed project model.
//!
//! # Invariants
//! - The walker emits events in depth-first source order; the builder
//!   preserves that order verbatim.
//! - Part suppression is a separate pass over the built model, never part
//!   of the traversal itself.

pub mod builder;
pub mod walk;
