use std::path::PathBuf;

use clap::Parser;

/// Route Generator
///
/// Scaffolds nested app-router directories for a route path. Every segment
/// gets its own page.tsx, and the deepest segment can optionally receive
/// layout, loading, error and not-found files.
///
/// Existing files are never overwritten; they are reported as skipped.
#[derive(Parser, Debug)]
#[command(name = "routegen")]
#[command(version)]
#[command(about, long_about)]
pub struct Cli {
    /// Suppress colored output (useful for CI/CD pipelines)
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Project directory containing `src/app` or `app`
    #[arg(short = 'd', long = "working-dir", env = "ROUTEGEN_WORKING_DIR")]
    pub working_dir: Option<PathBuf>,
}
