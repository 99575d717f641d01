//! Project directory selection.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{Result, RouteGenError};

/// Settings the scaffold needs beyond the interactive answers.
#[derive(Debug)]
pub struct Config {
    /// Canonical project root that `src/app` or `app` is looked up in.
    pub working_dir: PathBuf,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let working_dir = match &cli.working_dir {
            Some(path) => project_dir(path)?,
            None => project_dir(Path::new("."))?,
        };
        Ok(Self { working_dir })
    }
}

/// Resolves `path` against the current directory and checks that it is an
/// existing directory. Symlinks are resolved so reported paths stay stable.
fn project_dir(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| RouteGenError::Config(format!("Cannot determine current directory: {e}")))?
            .join(path)
    };

    let canonical = joined.canonicalize().map_err(|e| {
        RouteGenError::Config(format!(
            "Project directory does not exist: {} ({e})",
            joined.display()
        ))
    })?;

    if !canonical.is_dir() {
        return Err(RouteGenError::Config(format!(
            "Project directory is not a directory: {}",
            canonical.display()
        )));
    }

    Ok(canonical)
}
