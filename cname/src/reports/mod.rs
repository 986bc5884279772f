//! Report data structures for commands.
//!
//! Operations build reports and never print; commands render them to an
//! Output target.

mod files;
mod output;
mod project;
mod resource;

pub use files::FileEntry;
pub use output::{Report, TerminalOutput};
pub use project::ProjectReport;
pub use resource::{ResourceReport, RouteStatus};
