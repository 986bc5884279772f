//! Project creation report data structures.

use std::path::PathBuf;

use super::{
    files::FileEntry,
    output::{Output, Report},
};

/// Report data from creating a new project.
#[derive(Debug, Default)]
pub struct ProjectReport {
    pub name: String,
    /// Directory the project was created in.
    pub path: PathBuf,
    pub directories: Vec<String>,
    pub files: Vec<FileEntry>,
}

impl ProjectReport {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Whether any directory or file was created before the operation ended.
    pub fn has_progress(&self) -> bool {
        !self.directories.is_empty() || !self.files.is_empty()
    }
}

impl Report for ProjectReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("Created project {}", self.name));
        out.key_value("Path", &self.path.display().to_string());

        out.newline();
        out.section("Directories");
        for dir in &self.directories {
            out.added_item(&format!("{dir}/"));
        }

        out.newline();
        out.section("Files");
        for file in &self.files {
            file.render(out);
        }

        out.newline();
        out.section("Next steps");
        out.numbered_item(1, &format!("cd {}", self.name));
        out.numbered_item(2, "npm install");
        out.numbered_item(3, "npm run dev");
    }
}
