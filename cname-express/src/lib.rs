//! Express.js templates for the cname scaffolding tool.
//!
//! This crate renders the JavaScript files of a layered Express project and
//! knows how to wire a generated router into the project's `app.js`.
//!
//! # Usage
//!
//! This crate is used internally by the `cname` CLI tool. You typically don't need
//! to use it directly.
//!
//! ```ignore
//! use cname_core::FormattedName;
//! use cname_express::{ArtifactKind, GenerationOptions};
//! use std::path::Path;
//!
//! let name = FormattedName::parse("user")?;
//! let controller = ArtifactKind::Controller.template(&name, &GenerationOptions::default());
//!
//! // Writes controllers/user.controller.js unless it already exists
//! let result = controller.write(Path::new("."))?;
//! ```
//!
//! # Generated Output
//!
//! A resource named `user` produces:
//!
//! - `controllers/user.controller.js` - Class delegating to the service
//! - `services/user.service.js` - CRUD stubs
//! - `routes/user.routes.js` - Express router, mounted at `/api/users`
//! - `validators/user.validator.js` - Request body validation middleware
//! - `models/user.model.js` - mongoose schema stub (opt-in)

mod artifact;
mod patch;
mod skeleton;

pub mod files;

pub use artifact::{ArtifactKind, GenerationOptions};
pub use patch::{Patch, RouteRegistration};
pub use skeleton::{DIRECTORIES, ProjectSkeleton};
