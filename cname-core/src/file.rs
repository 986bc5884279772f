use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file. Scaffolded files are created once.
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => create_file(&path, &self.render()),
        }
    }
}

/// Create a directory and all of its parents. An existing directory is not an error.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io("create directory", path, e))
}

/// Check whether a path exists. Never fails.
pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

/// Create a file only if it does not exist yet.
///
/// Parent directories are created as needed. An existing file is left
/// untouched and reported as [`WriteResult::Skipped`].
pub fn create_file(path: &Path, content: &str) -> Result<WriteResult> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let mut file = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(WriteResult::Skipped),
        Err(e) => return Err(Error::io("create", path, e)),
    };

    file.write_all(content.as_bytes())
        .map_err(|e| Error::io("write", path, e))?;
    Ok(WriteResult::Written)
}

/// Read a file to a string.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io("read", path, e))
}

/// Delete a file.
pub fn delete_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::io("delete", path, e))
}

/// Write a file unconditionally, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|e| Error::io("write", path, e))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Only create the file; never touch an existing one.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only create if file doesn't exist (scaffolded code the user edits)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self::create_once()
    }
}
