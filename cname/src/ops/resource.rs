//! Resource generation: artifact files plus the `app.js` route patch.

use std::path::Path;

use cname_core::{Error, FormattedName, Result, file_exists, read_file, write_file};
use cname_express::{ArtifactKind, GenerationOptions, Patch, RouteRegistration};
use serde::Deserialize;

use crate::reports::{FileEntry, ResourceReport, RouteStatus};

/// Files whose presence marks a directory as a project root.
const PROJECT_FILES: [&str; 2] = ["app.js", "package.json"];

const ENTRY_POINT: &str = "app.js";

/// Options for the composite resource command.
#[derive(Debug, Clone, Copy)]
pub struct ResourceOptions {
    /// Generate a model and import it in the service.
    pub model: bool,
    /// Generate a validator.
    pub validation: bool,
}

impl Default for ResourceOptions {
    fn default() -> Self {
        Self {
            model: false,
            validation: true,
        }
    }
}

#[derive(Deserialize)]
struct PackageManifest {
    name: Option<String>,
}

/// Fail with `ProjectMissing` unless `root` looks like a generated project.
pub fn ensure_project(root: &Path) -> Result<()> {
    match PROJECT_FILES
        .into_iter()
        .find(|file| !file_exists(&root.join(file)))
    {
        Some(missing) => Err(Error::project_missing(root, missing)),
        None => Ok(()),
    }
}

/// Generate every artifact of a resource into `report`, then register its route.
///
/// Files that already exist are skipped. A failed route registration is
/// reported, never returned as an error. On error, `report` still lists the
/// files written so far.
pub fn generate_resource(
    root: &Path,
    raw_name: &str,
    opts: ResourceOptions,
    report: &mut ResourceReport,
) -> Result<()> {
    ensure_project(root)?;
    let name = FormattedName::parse(raw_name)?;

    let gen_opts = GenerationOptions {
        link_service: true,
        link_model: opts.model,
        include_imports: true,
    };

    *report = ResourceReport::new(project_name(root), raw_name);
    for kind in ArtifactKind::ALL {
        let wanted = match kind {
            ArtifactKind::Model => opts.model,
            ArtifactKind::Validator => opts.validation,
            _ => true,
        };
        if wanted {
            report.files.push(write_artifact(root, &name, kind, &gen_opts)?);
        }
    }

    report.route = register_route(root, &name);
    Ok(())
}

/// Generate a single artifact into `report`. Routes are also registered in `app.js`.
pub fn generate_artifact(
    root: &Path,
    raw_name: &str,
    kind: ArtifactKind,
    gen_opts: GenerationOptions,
    report: &mut ResourceReport,
) -> Result<()> {
    ensure_project(root)?;
    let name = FormattedName::parse(raw_name)?;

    *report = ResourceReport::new(project_name(root), raw_name);
    report.files.push(write_artifact(root, &name, kind, &gen_opts)?);

    if kind == ArtifactKind::Route {
        report.route = register_route(root, &name);
    }
    Ok(())
}

fn write_artifact(
    root: &Path,
    name: &FormattedName,
    kind: ArtifactKind,
    gen_opts: &GenerationOptions,
) -> Result<FileEntry> {
    let result = kind.template(name, gen_opts).write(root)?;
    Ok(FileEntry::new(kind.relative_path(name), result))
}

/// Wire the resource's router into `app.js`.
///
/// On any failure `app.js` is left as it was and the lines to add by hand
/// are returned instead.
pub fn register_route(root: &Path, name: &FormattedName) -> RouteStatus {
    let registration = RouteRegistration::new(name);
    let entry_point = root.join(ENTRY_POINT);

    let manual = |reason: String| RouteStatus::Manual {
        reason,
        lines: vec![
            registration.import_line.clone(),
            registration.route_line.clone(),
        ],
    };

    let content = match read_file(&entry_point) {
        Ok(content) => content,
        Err(e) => return manual(e.to_string()),
    };

    match registration.apply(&content) {
        Patch::AlreadyRegistered => RouteStatus::AlreadyRegistered {
            mount_path: registration.mount_path.clone(),
        },
        Patch::Applied(patched) => match write_file(&entry_point, &patched) {
            Ok(()) => RouteStatus::Registered {
                mount_path: registration.mount_path.clone(),
            },
            Err(e) => manual(e.to_string()),
        },
        Patch::Unanchored => manual(format!("no place to add routes found in {ENTRY_POINT}")),
    }
}

/// Project name from `package.json`; unreadable manifests yield `None`.
fn project_name(root: &Path) -> Option<String> {
    let content = read_file(&root.join("package.json")).ok()?;
    serde_json::from_str::<PackageManifest>(&content)
        .ok()?
        .name
}

#[cfg(test)]
mod tests {
    use std::fs;

    use cname_core::WriteResult;
    use tempfile::TempDir;

    use super::*;
    use crate::{ops::generate_project, reports::ProjectReport};

    /// A freshly generated project named `demo`; returns the temp dir and the project root.
    fn project() -> (TempDir, std::path::PathBuf) {
        let tmp = TempDir::new().unwrap();
        generate_project(tmp.path(), "demo", &mut ProjectReport::default()).unwrap();
        let root = tmp.path().join("demo");
        (tmp, root)
    }

    fn resource(root: &Path, raw_name: &str, opts: ResourceOptions) -> Result<ResourceReport> {
        let mut report = ResourceReport::default();
        generate_resource(root, raw_name, opts, &mut report).map(|()| report)
    }

    fn artifact(
        root: &Path,
        raw_name: &str,
        kind: ArtifactKind,
        gen_opts: GenerationOptions,
    ) -> Result<ResourceReport> {
        let mut report = ResourceReport::default();
        generate_artifact(root, raw_name, kind, gen_opts, &mut report).map(|()| report)
    }

    fn read(root: &Path, rel: &str) -> String {
        fs::read_to_string(root.join(rel)).unwrap()
    }

    #[test]
    fn test_missing_project_writes_nothing() {
        let tmp = TempDir::new().unwrap();

        let err = resource(tmp.path(), "user", ResourceOptions::default()).unwrap_err();
        assert!(matches!(
            *err,
            Error::ProjectMissing {
                missing: "app.js",
                ..
            }
        ));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_package_json() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("app.js"), "").unwrap();

        let err = artifact(
            tmp.path(),
            "user",
            ArtifactKind::Controller,
            GenerationOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            *err,
            Error::ProjectMissing {
                missing: "package.json",
                ..
            }
        ));
        assert!(!tmp.path().join("controllers").exists());
    }

    #[test]
    fn test_invalid_name_writes_nothing() {
        let (_tmp, root) = project();
        let before = read(&root, "app.js");

        let err = resource(&root, "!!!", ResourceOptions::default()).unwrap_err();
        assert!(matches!(*err, Error::InvalidName { .. }));
        assert_eq!(fs::read_dir(root.join("controllers")).unwrap().count(), 0);
        assert_eq!(read(&root, "app.js"), before);
    }

    #[test]
    fn test_resource() {
        let (_tmp, root) = project();

        let report = resource(&root, "user", ResourceOptions::default()).unwrap();

        let paths: Vec<&str> = report.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "controllers/user.controller.js",
                "services/user.service.js",
                "routes/user.routes.js",
                "validators/user.validator.js",
            ]
        );
        assert!(report.files.iter().all(|f| f.result == WriteResult::Written));
        assert!(!root.join("models").exists());
        assert_eq!(report.project.as_deref(), Some("demo"));
        assert_eq!(
            report.route,
            RouteStatus::Registered {
                mount_path: "/api/users".into()
            }
        );

        let app = read(&root, "app.js");
        assert!(app.contains("const userRoutes = require('./routes/user.routes');"));
        assert!(app.contains("app.use('/api/users', userRoutes);"));
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let (_tmp, root) = project();
        resource(&root, "user", ResourceOptions::default()).unwrap();

        let tracked = [
            "app.js",
            "controllers/user.controller.js",
            "services/user.service.js",
            "routes/user.routes.js",
            "validators/user.validator.js",
        ];
        let before: Vec<String> = tracked.iter().map(|p| read(&root, p)).collect();

        let report = resource(&root, "user", ResourceOptions::default()).unwrap();

        let after: Vec<String> = tracked.iter().map(|p| read(&root, p)).collect();
        assert_eq!(before, after);
        assert!(report.files.iter().all(|f| f.result == WriteResult::Skipped));
        assert_eq!(
            report.route,
            RouteStatus::AlreadyRegistered {
                mount_path: "/api/users".into()
            }
        );

        let app = &after[0];
        assert_eq!(app.matches("const userRoutes = require").count(), 1);
        assert_eq!(app.matches("app.use('/api/users', userRoutes);").count(), 1);
    }

    #[test]
    fn test_resource_name_is_cleaned() {
        let (_tmp, root) = project();

        resource(&root, "Order Item!!", ResourceOptions::default()).unwrap();

        for kind in ["controller", "service", "validator"] {
            assert!(root.join(format!("{kind}s/orderitem.{kind}.js")).exists());
        }
        assert!(root.join("routes/orderitem.routes.js").exists());
        assert!(read(&root, "controllers/orderitem.controller.js").contains("class OrderitemController"));
        assert!(read(&root, "app.js").contains("app.use('/api/orderitems', orderitemRoutes);"));
    }

    #[test]
    fn test_model_and_no_validation() {
        let (_tmp, root) = project();

        resource(
            &root,
            "user",
            ResourceOptions {
                model: true,
                validation: false,
            },
        )
        .unwrap();

        assert!(root.join("models/user.model.js").exists());
        assert!(!root.join("validators/user.validator.js").exists());
        assert!(read(&root, "services/user.service.js").contains("require(\"../models/user.model\")"));
    }

    #[test]
    fn test_standalone_route_registers() {
        let (_tmp, root) = project();

        let report = artifact(
            &root,
            "post",
            ArtifactKind::Route,
            GenerationOptions {
                include_imports: false,
                ..GenerationOptions::default()
            },
        )
        .unwrap();

        assert!(matches!(report.route, RouteStatus::Registered { .. }));
        assert!(!read(&root, "routes/post.routes.js").contains("require('../controllers"));
        assert!(read(&root, "app.js").contains("app.use('/api/posts', postRoutes);"));
    }

    #[test]
    fn test_standalone_controller_leaves_app_js() {
        let (_tmp, root) = project();
        let before = read(&root, "app.js");

        let report = artifact(
            &root,
            "user",
            ArtifactKind::Controller,
            GenerationOptions {
                link_service: false,
                ..GenerationOptions::default()
            },
        )
        .unwrap();

        assert_eq!(report.route, RouteStatus::NotAttempted);
        assert_eq!(read(&root, "app.js"), before);
        assert!(!read(&root, "controllers/user.controller.js").contains("UserService"));
    }

    #[test]
    fn test_unanchored_app_js_is_untouched() {
        let (_tmp, root) = project();
        let custom = "const express = require('express');\nconst app = express();\n";
        fs::write(root.join("app.js"), custom).unwrap();

        let report = resource(&root, "user", ResourceOptions::default()).unwrap();

        match report.route {
            RouteStatus::Manual { lines, .. } => assert_eq!(
                lines,
                [
                    "const userRoutes = require('./routes/user.routes');",
                    "app.use('/api/users', userRoutes);",
                ]
            ),
            other => panic!("expected manual registration, got {other:?}"),
        }
        assert_eq!(read(&root, "app.js"), custom);
        assert!(root.join("routes/user.routes.js").exists());
    }

    #[test]
    fn test_unreadable_manifest_is_tolerated() {
        let (_tmp, root) = project();
        fs::write(root.join("package.json"), "not json").unwrap();

        let report = resource(&root, "user", ResourceOptions::default()).unwrap();
        assert_eq!(report.project, None);
    }

    #[test]
    fn test_missing_project_wins_over_invalid_name() {
        let tmp = TempDir::new().unwrap();

        let err = resource(tmp.path(), "!!!", ResourceOptions::default()).unwrap_err();
        assert!(matches!(*err, Error::ProjectMissing { .. }));

        let err = artifact(
            tmp.path(),
            "!!!",
            ArtifactKind::Model,
            GenerationOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ProjectMissing { .. }));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_unreadable_app_js_falls_back_to_manual() {
        let (_tmp, root) = project();
        let app_js = root.join("app.js");
        fs::remove_file(&app_js).unwrap();
        fs::create_dir(&app_js).unwrap();

        let report = resource(&root, "user", ResourceOptions::default()).unwrap();

        match &report.route {
            RouteStatus::Manual { reason, lines } => {
                assert!(reason.contains(&app_js.display().to_string()), "{reason}");
                assert_eq!(lines.len(), 2);
            }
            other => panic!("expected manual registration, got {other:?}"),
        }
        assert!(app_js.is_dir());
        assert!(report.files.iter().all(|f| f.result == WriteResult::Written));
        assert!(root.join("controllers/user.controller.js").exists());
        assert!(root.join("routes/user.routes.js").exists());
    }

    #[test]
    fn test_failed_write_keeps_earlier_files_in_report() {
        let (_tmp, root) = project();
        let before = read(&root, "app.js");
        fs::remove_dir(root.join("validators")).unwrap();
        fs::write(root.join("validators"), "").unwrap();

        let mut report = ResourceReport::default();
        let err = generate_resource(&root, "user", ResourceOptions::default(), &mut report)
            .unwrap_err();

        assert!(matches!(*err, Error::Io { .. }));
        let paths: Vec<&str> = report.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "controllers/user.controller.js",
                "services/user.service.js",
                "routes/user.routes.js",
            ]
        );
        assert!(report.has_progress());
        assert_eq!(report.route, RouteStatus::NotAttempted);
        assert_eq!(read(&root, "app.js"), before);
    }
}
