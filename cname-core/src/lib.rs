//! Core utilities and types for the cname scaffolding tool.
//!
//! This crate provides the file-system helpers, name formatting and error
//! types shared by the template library and the CLI.

mod error;
mod file;
mod name;

pub use error::{Error, Result};
// File operations
pub use file::{
    FileRules, GeneratedFile, Overwrite, WriteResult, create_file, delete_file, ensure_dir,
    file_exists, read_file, write_file,
};
// Name formatting
pub use name::FormattedName;
