use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for cname operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no project found in '{root}'")]
    #[diagnostic(
        code(cname::project_missing),
        help("create a new project first using: cname g new <project-name>")
    )]
    ProjectMissing {
        root: PathBuf,
        /// Name of the first required file that was not found.
        missing: &'static str,
    },

    #[error("project '{name}' already exists")]
    #[diagnostic(
        code(cname::project_exists),
        help("choose another name or remove the existing directory")
    )]
    ProjectExists { name: String, path: PathBuf },

    #[error("invalid name '{raw}'")]
    #[diagnostic(
        code(cname::invalid_name),
        help("names must contain at least one ASCII letter or digit")
    )]
    InvalidName { raw: String },

    #[error("failed to {action} '{path}'")]
    #[diagnostic(code(cname::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the failing path.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Io {
            action,
            path: path.into(),
            source,
        })
    }

    pub fn project_missing(root: impl Into<PathBuf>, missing: &'static str) -> Box<Self> {
        Box::new(Self::ProjectMissing {
            root: root.into(),
            missing,
        })
    }

    pub fn project_exists(name: impl Into<String>, path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Self::ProjectExists {
            name: name.into(),
            path: path.into(),
        })
    }

    pub fn invalid_name(raw: impl Into<String>) -> Box<Self> {
        Box::new(Self::InvalidName { raw: raw.into() })
    }
}
