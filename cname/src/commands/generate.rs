use std::path::PathBuf;

use clap::{Args, Subcommand};
use cname_express::{ArtifactKind, GenerationOptions};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, ResourceOptions},
    reports::{ProjectReport, Report, ResourceReport, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Directory to run in (defaults to current directory)
    #[arg(short = 'C', long = "dir", default_value = ".", global = true)]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub target: GenerateTarget,
}

#[derive(Subcommand)]
pub enum GenerateTarget {
    /// Generate controller, service, route and validator for a resource
    Resource(ResourceArgs),

    /// Generate a controller
    Controller {
        name: String,
        /// Delegate handlers to the resource's service
        #[arg(short, long)]
        import: bool,
    },

    /// Generate a service
    Service {
        name: String,
        /// Import the resource's model
        #[arg(short, long)]
        model: bool,
    },

    /// Generate a route and register it in app.js
    Route {
        name: String,
        /// Require the resource's controller and validator
        #[arg(short, long)]
        import: bool,
    },

    /// Generate a validator
    Validator { name: String },

    /// Generate a mongoose model
    Model { name: String },

    /// Create a new project
    New {
        /// Project name, also the directory created
        name: String,
    },
}

#[derive(Args)]
pub struct ResourceArgs {
    /// Resource name, e.g. "user"
    pub name: String,

    /// Also generate a model and import it in the service
    #[arg(short, long)]
    pub model: bool,

    /// Generate a validator (default)
    #[arg(short, long, overrides_with = "no_validation")]
    pub validation: bool,

    /// Skip the validator
    #[arg(long, overrides_with = "validation")]
    pub no_validation: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let root = self.dir.as_path();

        let mut report = ResourceReport::default();
        let result = match &self.target {
            GenerateTarget::Resource(args) => ops::generate_resource(
                root,
                &args.name,
                ResourceOptions {
                    model: args.model,
                    validation: args.validation || !args.no_validation,
                },
                &mut report,
            ),
            GenerateTarget::Controller { name, import } => ops::generate_artifact(
                root,
                name,
                ArtifactKind::Controller,
                GenerationOptions {
                    link_service: *import,
                    ..GenerationOptions::default()
                },
                &mut report,
            ),
            GenerateTarget::Service { name, model } => ops::generate_artifact(
                root,
                name,
                ArtifactKind::Service,
                GenerationOptions {
                    link_model: *model,
                    ..GenerationOptions::default()
                },
                &mut report,
            ),
            GenerateTarget::Route { name, import } => ops::generate_artifact(
                root,
                name,
                ArtifactKind::Route,
                GenerationOptions {
                    include_imports: *import,
                    ..GenerationOptions::default()
                },
                &mut report,
            ),
            GenerateTarget::Validator { name } => ops::generate_artifact(
                root,
                name,
                ArtifactKind::Validator,
                GenerationOptions::default(),
                &mut report,
            ),
            GenerateTarget::Model { name } => ops::generate_artifact(
                root,
                name,
                ArtifactKind::Model,
                GenerationOptions::default(),
                &mut report,
            ),
            GenerateTarget::New { name } => {
                let mut project = ProjectReport::default();
                let result = ops::generate_project(root, name, &mut project);
                Self::finish(&project, project.has_progress(), result);
                return Ok(());
            }
        };

        Self::finish(&report, report.has_progress(), result);
        Ok(())
    }

    /// Render the report, even a partial one, then exit on failure.
    ///
    /// Files written before a failure stay on disk, so they are listed
    /// before the diagnostic.
    fn finish(report: &dyn Report, progressed: bool, result: cname_core::Result<()>) {
        if result.is_ok() || progressed {
            report.render(&mut TerminalOutput::new());
        }
        result.unwrap_or_exit();
    }
}
