//! New project creation.

use std::path::Path;

use cname_core::{Error, Result, ensure_dir};
use cname_express::ProjectSkeleton;

use crate::reports::{FileEntry, ProjectReport};

/// Create `root/name` with the project skeleton, recording each step in `report`.
///
/// An existing path is never touched. Files written before a later failure
/// stay on disk and stay listed in `report`.
pub fn generate_project(root: &Path, raw_name: &str, report: &mut ProjectReport) -> Result<()> {
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(Error::invalid_name(raw_name));
    }

    let project_dir = root.join(name);
    if project_dir.exists() {
        return Err(Error::project_exists(name, project_dir));
    }

    let skeleton = ProjectSkeleton::new(name);
    *report = ProjectReport::new(skeleton.name(), &project_dir);

    ensure_dir(&project_dir)?;
    for dir in skeleton.directories() {
        ensure_dir(&project_dir.join(dir))?;
        report.directories.push(dir.to_string());
    }

    for file in skeleton.files() {
        let result = file.write(&project_dir)?;
        let path = file.path(Path::new(""));
        report
            .files
            .push(FileEntry::new(path.to_string_lossy().replace('\\', "/"), result));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use cname_core::WriteResult;
    use cname_express::DIRECTORIES;
    use tempfile::TempDir;

    use super::*;

    fn project_at(root: &Path, raw_name: &str) -> Result<ProjectReport> {
        let mut report = ProjectReport::default();
        generate_project(root, raw_name, &mut report).map(|()| report)
    }

    #[test]
    fn test_new_project_layout() {
        let tmp = TempDir::new().unwrap();

        let report = project_at(tmp.path(), "demo").unwrap();
        let root = tmp.path().join("demo");

        for dir in DIRECTORIES {
            assert!(root.join(dir).is_dir(), "missing {dir}/");
        }
        assert_eq!(report.directories.len(), 8);
        assert_eq!(report.files.len(), 12);
        assert!(report.files.iter().all(|f| f.result == WriteResult::Written));
        for file in &report.files {
            assert!(root.join(&file.path).is_file(), "missing {}", file.path);
        }

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
        assert_eq!(manifest["name"], "demo");

        let app = fs::read_to_string(root.join("app.js")).unwrap();
        assert!(app.contains("//import routes here"));
        assert!(app.contains("// TODO: Add your routes here"));
    }

    #[test]
    fn test_existing_path_is_untouched() {
        let tmp = TempDir::new().unwrap();
        let existing = tmp.path().join("demo");
        fs::create_dir(&existing).unwrap();
        fs::write(existing.join("notes.txt"), "keep me").unwrap();

        let err = project_at(tmp.path(), "demo").unwrap_err();

        assert!(matches!(*err, Error::ProjectExists { .. }));
        assert_eq!(fs::read_dir(&existing).unwrap().count(), 1);
        assert_eq!(
            fs::read_to_string(existing.join("notes.txt")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let tmp = TempDir::new().unwrap();

        let err = project_at(tmp.path(), "   ").unwrap_err();
        assert!(matches!(*err, Error::InvalidName { .. }));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_nothing_to_report_when_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("demo")).unwrap();

        let mut report = ProjectReport::default();
        assert!(generate_project(tmp.path(), "demo", &mut report).is_err());
        assert!(!report.has_progress());
    }
}
