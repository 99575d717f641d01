//! Skip-on-conflict file creation.
//!
//! Generated files are written exactly once. When a file is already present it
//! is left untouched and reported as skipped, so rerunning the generator for
//! the same route is harmless.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::error::{Result, RouteGenError};

/// Result of a single [`FileWriter::write`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Created(PathBuf),
    Skipped(PathBuf),
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Created(path) | WriteOutcome::Skipped(path) => path,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, WriteOutcome::Created(_))
    }
}

/// Creates generated files and reports each outcome to the operator.
///
/// Reported paths are shown relative to `root`.
pub struct FileWriter {
    root: PathBuf,
}

impl FileWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writes `content` to `dir/file_name` unless the file already exists.
    ///
    /// The existence check and the creation happen in one exclusive open, so
    /// an existing file is never truncated.
    pub fn write<W: Write>(
        &self,
        out: &mut W,
        dir: &Path,
        file_name: &str,
        content: &str,
    ) -> Result<WriteOutcome> {
        let path = dir.join(file_name);

        let outcome = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(content.as_bytes())
                    .map_err(|source| RouteGenError::WriteFile {
                        path: path.clone(),
                        source,
                    })?;
                WriteOutcome::Created(path)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => WriteOutcome::Skipped(path),
            Err(source) => return Err(RouteGenError::WriteFile { path, source }),
        };

        self.report(out, &outcome)?;
        Ok(outcome)
    }

    /// Creates `dir` and any missing parents.
    pub fn ensure_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|source| RouteGenError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        log::debug!("Ensured directory: {}", dir.display());
        Ok(())
    }

    fn report<W: Write>(&self, out: &mut W, outcome: &WriteOutcome) -> Result<()> {
        let shown = self.relative(outcome.path());
        match outcome {
            WriteOutcome::Created(_) => {
                writeln!(out, "{} {}", "✅ Created".green(), shown.display())?
            }
            WriteOutcome::Skipped(_) => writeln!(
                out,
                "{} {}",
                "⚠️  Skipped (already exists):".yellow(),
                shown.display()
            )?,
        }
        Ok(())
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
