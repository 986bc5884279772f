//! Resource generation report data structures.

use super::{
    files::FileEntry,
    output::{Output, Report},
};

/// What happened to the route registration in `app.js`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RouteStatus {
    /// No route was generated, so `app.js` was not touched.
    #[default]
    NotAttempted,
    /// Import and route lines were inserted.
    Registered { mount_path: String },
    /// `app.js` already mounts the router; nothing was written.
    AlreadyRegistered { mount_path: String },
    /// `app.js` could not be patched and was left untouched.
    Manual { reason: String, lines: Vec<String> },
}

/// Report data from generating a resource or a single resource file.
#[derive(Debug, Default)]
pub struct ResourceReport {
    /// Name from the project's `package.json`, when readable.
    pub project: Option<String>,
    /// Resource name as typed by the user.
    pub resource: String,
    pub files: Vec<FileEntry>,
    pub route: RouteStatus,
}

impl ResourceReport {
    pub fn new(project: Option<String>, resource: impl Into<String>) -> Self {
        Self {
            project,
            resource: resource.into(),
            files: Vec::new(),
            route: RouteStatus::NotAttempted,
        }
    }

    /// Whether anything was written before the operation ended.
    pub fn has_progress(&self) -> bool {
        !self.files.is_empty()
    }
}

impl Report for ResourceReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(project) = &self.project {
            out.key_value("Project", project);
        }
        out.key_value("Resource", &self.resource);

        out.newline();
        out.section("Files");
        for file in &self.files {
            file.render(out);
        }

        match &self.route {
            RouteStatus::NotAttempted => {}
            RouteStatus::Registered { mount_path } => {
                out.newline();
                out.key_value("Route", &format!("{mount_path} registered in app.js"));
            }
            RouteStatus::AlreadyRegistered { mount_path } => {
                out.newline();
                out.key_value("Route", &format!("{mount_path} already registered in app.js"));
            }
            RouteStatus::Manual { reason, lines } => {
                out.warning(&format!("could not update app.js: {reason}"));
                out.newline();
                out.section("Add these lines to app.js manually");
                for line in lines {
                    out.preformatted(&format!("  {line}"));
                }
            }
        }
    }
}
