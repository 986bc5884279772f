//! The fixed layout of a new project.

use cname_core::GeneratedFile;

use crate::files::{
    ApiErrorJs, AppJs, AsyncErrorHandlerJs, DotEnv, GitIgnore, GlobalErrorHandlerJs, LoggerJs,
    LogsGitKeep, PackageJson, Readme, SendResponseJs, ServerJs,
};

/// Directories created in every new project.
pub const DIRECTORIES: [&str; 8] = [
    "controllers",
    "services",
    "routes",
    "validators",
    "middlewares",
    "utils",
    "config",
    "logs",
];

/// Directories and files making up a new project named `name`.
pub struct ProjectSkeleton {
    name: String,
}

impl ProjectSkeleton {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directories(&self) -> &'static [&'static str] {
        &DIRECTORIES
    }

    /// Root files first, then helpers, then middlewares.
    pub fn files(&self) -> Vec<Box<dyn GeneratedFile>> {
        vec![
            Box::new(AppJs),
            Box::new(ServerJs),
            Box::new(PackageJson::new(&self.name)),
            Box::new(DotEnv),
            Box::new(GitIgnore),
            Box::new(Readme::new(&self.name)),
            Box::new(LoggerJs),
            Box::new(ApiErrorJs),
            Box::new(SendResponseJs),
            Box::new(AsyncErrorHandlerJs),
            Box::new(GlobalErrorHandlerJs),
            Box::new(LogsGitKeep),
        ]
    }
}
