//! Application base directory lookup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RouteGenError};

/// Directories checked for an existing app router, in order of preference.
const CANDIDATES: [&str; 2] = ["src/app", "app"];

/// Created when no candidate exists yet.
const FALLBACK: &str = "app";

/// Returns the directory under which routes are generated.
///
/// Prefers `src/app` over `app`. When neither exists, `app` is created
/// (including missing parents) below `root`.
pub fn resolve_app_base(root: &Path) -> Result<PathBuf> {
    for candidate in CANDIDATES {
        let path = root.join(candidate);
        if path.exists() {
            log::debug!("Using existing app directory: {}", path.display());
            return Ok(path);
        }
    }

    let path = root.join(FALLBACK);
    fs::create_dir_all(&path).map_err(|source| RouteGenError::CreateDir {
        path: path.clone(),
        source,
    })?;
    log::debug!("Created app directory: {}", path.display());

    Ok(path)
}
