//! Express.js file generators.

mod app_js;
mod controller;
mod dotfiles;
mod error_handler;
mod model;
mod package_json;
mod readme;
mod route;
mod service;
mod utils;
mod validator;

pub use app_js::{AppJs, IMPORT_MARKER, NOT_FOUND_HANDLER, ROUTE_MARKER, ServerJs};
pub use controller::ControllerJs;
pub use dotfiles::{DotEnv, GitIgnore, LogsGitKeep};
pub use error_handler::GlobalErrorHandlerJs;
pub use model::ModelJs;
pub use package_json::{Dependency, PackageJson};
pub use readme::Readme;
pub use route::RouteJs;
pub use service::ServiceJs;
pub use utils::{ApiErrorJs, AsyncErrorHandlerJs, LoggerJs, SendResponseJs};
pub use validator::ValidatorJs;
