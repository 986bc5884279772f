//! Artifact kinds and the renderer registered for each.

use std::fmt;

use cname_core::{FormattedName, GeneratedFile};

use crate::files::{ControllerJs, ModelJs, RouteJs, ServiceJs, ValidatorJs};

/// Cross-reference flags applied when rendering resource artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Controller handlers delegate to the service.
    pub link_service: bool,
    /// Service imports the data model.
    pub link_model: bool,
    /// Route file requires its controller and validator.
    pub include_imports: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            link_service: true,
            link_model: false,
            include_imports: true,
        }
    }
}

/// One kind of generated resource file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Controller,
    Service,
    Route,
    Validator,
    Model,
}

impl ArtifactKind {
    /// All kinds, in composite generation order.
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Controller,
        ArtifactKind::Service,
        ArtifactKind::Route,
        ArtifactKind::Model,
        ArtifactKind::Validator,
    ];

    /// Directory the artifact is written to, relative to the project root.
    pub fn dir(self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controllers",
            ArtifactKind::Service => "services",
            ArtifactKind::Route => "routes",
            ArtifactKind::Validator => "validators",
            ArtifactKind::Model => "models",
        }
    }

    /// File name suffix following the resource name.
    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Controller => "controller",
            ArtifactKind::Service => "service",
            ArtifactKind::Route => "routes",
            ArtifactKind::Validator => "validator",
            ArtifactKind::Model => "model",
        }
    }

    /// Relative path of the artifact, e.g. `routes/user.routes.js`.
    pub fn relative_path(self, name: &FormattedName) -> String {
        format!("{}/{}.{}.js", self.dir(), name.lower, self.suffix())
    }

    /// The renderer for this kind.
    pub fn template(
        self,
        name: &FormattedName,
        opts: &GenerationOptions,
    ) -> Box<dyn GeneratedFile> {
        let name = name.clone();
        match self {
            ArtifactKind::Controller => {
                Box::new(ControllerJs::new(name).with_service(opts.link_service))
            }
            ArtifactKind::Service => Box::new(ServiceJs::new(name).with_model(opts.link_model)),
            ArtifactKind::Route => Box::new(RouteJs::new(name).with_imports(opts.include_imports)),
            ArtifactKind::Validator => Box::new(ValidatorJs::new(name)),
            ArtifactKind::Model => Box::new(ModelJs::new(name)),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_template_path_matches_relative_path() {
        let name = FormattedName::new("Order Item!!");
        let base = Path::new("/project");

        for kind in ArtifactKind::ALL {
            let file = kind.template(&name, &GenerationOptions::default());
            assert_eq!(file.path(base), base.join(kind.relative_path(&name)));
        }
    }

    #[test]
    fn test_relative_paths() {
        let name = FormattedName::new("user");
        assert_eq!(
            ArtifactKind::Controller.relative_path(&name),
            "controllers/user.controller.js"
        );
        assert_eq!(ArtifactKind::Route.relative_path(&name), "routes/user.routes.js");
        assert_eq!(ArtifactKind::Model.relative_path(&name), "models/user.model.js");
    }

    #[test]
    fn test_options_reach_templates() {
        let name = FormattedName::new("user");
        let opts = GenerationOptions {
            link_service: false,
            link_model: true,
            include_imports: false,
        };

        let controller = ArtifactKind::Controller.template(&name, &opts).render();
        let service = ArtifactKind::Service.template(&name, &opts).render();
        let route = ArtifactKind::Route.template(&name, &opts).render();

        assert!(!controller.contains("UserService"));
        assert!(service.contains("require(\"../models/user.model\")"));
        assert!(!route.contains("require('../controllers"));
    }

    #[test]
    fn test_identifiers_use_first_letter_casing() {
        let name = FormattedName::new("Order Item!!");
        let controller = ArtifactKind::Controller
            .template(&name, &GenerationOptions::default())
            .render();

        assert!(controller.contains("class OrderitemController {"));
        assert!(controller.contains("OrderitemService.getAll(req.query)"));
    }
}
