//! Per-file outcome shared by the generation reports.

use cname_core::WriteResult;

use super::output::Output;

/// A generated file and what happened when writing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the directory the command ran in.
    pub path: String,
    pub result: WriteResult,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, result: WriteResult) -> Self {
        Self {
            path: path.into(),
            result,
        }
    }

    pub(super) fn render(&self, out: &mut dyn Output) {
        match self.result {
            WriteResult::Written => out.added_item(&self.path),
            WriteResult::Skipped => out.warning(&format!("{} already exists, skipped", self.path)),
        }
    }
}
