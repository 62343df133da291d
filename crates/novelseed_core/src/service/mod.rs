//! Conversion use-case service.
//!
//! # Responsibility
//! - Orchestrate the sequential pipeline: load outline, build model,
//!   back up the output location, write the project.
//! - Keep the CLI decoupled from the individual phases.

pub mod convert_service;
