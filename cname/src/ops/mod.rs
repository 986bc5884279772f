//! Core operations.
//!
//! This module contains the business logic for cname commands,
//! separated from CLI argument parsing and output rendering.

pub mod project;
pub mod resource;

pub use project::generate_project;
pub use resource::{ResourceOptions, generate_artifact, generate_resource};
