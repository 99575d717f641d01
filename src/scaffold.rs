//! Interactive route generation.
//!
//! A run walks through a fixed sequence of states:
//!
//! 1. ask for the route (empty input aborts before touching the filesystem)
//! 2. resolve the app base directory
//! 3. create one directory and one `page.tsx` per route segment
//! 4. ask for each optional extra file
//! 5. write the accepted extras into the deepest directory
//!
//! There is no way back to an earlier state and nothing is retried.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::base_dir::resolve_app_base;
use crate::error::Result;
use crate::prompt::Prompt;
use crate::route::Route;
use crate::template::{FileKind, page_content};
use crate::writer::{FileWriter, WriteOutcome};

pub const ROUTE_PROMPT: &str = "📍 Enter route path (e.g., blog/post/comment): ";
pub const ROUTE_REQUIRED: &str = "❌ Route path is required.";
pub const SUCCESS: &str = "🚀 Nested route created successfully.";

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// No route was entered; nothing was written.
    Aborted,
    Completed(Summary),
}

/// Everything a completed run touched.
#[derive(Debug)]
pub struct Summary {
    pub route: Route,
    pub leaf_dir: PathBuf,
    pub files: Vec<WriteOutcome>,
}

impl Summary {
    pub fn created(&self) -> usize {
        self.files.iter().filter(|f| f.is_created()).count()
    }

    pub fn skipped(&self) -> usize {
        self.files.len() - self.created()
    }
}

#[derive(Debug)]
enum State {
    AwaitRoute,
    Resolve { route: Route },
    BuildChain { route: Route, base: PathBuf },
    AskExtras { route: Route, leaf: PathBuf },
    WriteExtras { route: Route, leaf: PathBuf, extras: Vec<FileKind> },
    Done { route: Route, leaf: PathBuf },
    Abort,
}

/// Drives one interactive run rooted at a project directory.
///
/// Prompts and file reports go to the prompt's output; the abort message goes
/// to `errors` (stderr unless replaced with [`Scaffold::with_errors`]).
pub struct Scaffold<R, W, E = io::Stderr> {
    root: PathBuf,
    prompt: Prompt<R, W>,
    errors: E,
    writer: FileWriter,
    files: Vec<WriteOutcome>,
}

impl<R: BufRead, W: Write> Scaffold<R, W> {
    pub fn new(root: impl Into<PathBuf>, prompt: Prompt<R, W>) -> Self {
        let root = root.into();
        Self {
            writer: FileWriter::new(root.clone()),
            root,
            prompt,
            errors: io::stderr(),
            files: Vec::new(),
        }
    }
}

impl<R: BufRead, W: Write, E: Write> Scaffold<R, W, E> {
    pub fn with_errors<F: Write>(self, errors: F) -> Scaffold<R, W, F> {
        Scaffold {
            root: self.root,
            prompt: self.prompt,
            errors,
            writer: self.writer,
            files: self.files,
        }
    }

    /// Runs every state to completion and releases the prompt.
    pub fn run(mut self) -> Result<Outcome> {
        let mut state = State::AwaitRoute;

        loop {
            log::debug!("Entering state: {:?}", state);
            state = match state {
                State::AwaitRoute => self.await_route()?,
                State::Resolve { route } => {
                    let base = resolve_app_base(&self.root)?;
                    State::BuildChain { route, base }
                }
                State::BuildChain { route, base } => {
                    self.build_chain(&route, &base)?;
                    let leaf = route.leaf_dir(&base);
                    State::AskExtras { route, leaf }
                }
                State::AskExtras { route, leaf } => {
                    let extras = self.ask_extras()?;
                    State::WriteExtras {
                        route,
                        leaf,
                        extras,
                    }
                }
                State::WriteExtras {
                    route,
                    leaf,
                    extras,
                } => {
                    self.write_extras(&leaf, &extras)?;
                    State::Done { route, leaf }
                }
                State::Done { route, leaf } => {
                    writeln!(self.prompt.output(), "{}", SUCCESS.green().bold())?;
                    self.prompt.close()?;
                    return Ok(Outcome::Completed(Summary {
                        route,
                        leaf_dir: leaf,
                        files: self.files,
                    }));
                }
                State::Abort => {
                    writeln!(self.errors, "{}", ROUTE_REQUIRED.red())?;
                    self.errors.flush()?;
                    self.prompt.close()?;
                    return Ok(Outcome::Aborted);
                }
            };
        }
    }

    fn await_route(&mut self) -> Result<State> {
        let input = self.prompt.ask(ROUTE_PROMPT)?;
        match Route::parse(&input) {
            Some(route) => {
                log::debug!("Route has {} segments: {}", route.depth(), route);
                Ok(State::Resolve { route })
            }
            None => Ok(State::Abort),
        }
    }

    /// Creates a directory and page for every prefix of `route`.
    fn build_chain(&mut self, route: &Route, base: &Path) -> Result<()> {
        let mut current = base.to_path_buf();

        for prefix in route.prefixes() {
            current.push(prefix.last());
            self.writer.ensure_dir(&current)?;

            let content = page_content(&prefix.identifier(), &prefix.path());
            let outcome = self.writer.write(
                self.prompt.output(),
                &current,
                FileKind::Page.file_name(),
                &content,
            )?;
            self.files.push(outcome);
        }

        Ok(())
    }

    fn ask_extras(&mut self) -> Result<Vec<FileKind>> {
        let mut accepted = Vec::new();
        for kind in FileKind::EXTRAS {
            let Some(question) = kind.prompt() else {
                continue;
            };
            if self.prompt.confirm(question)? {
                accepted.push(kind);
            }
        }
        log::debug!("Accepted extras: {:?}", accepted);
        Ok(accepted)
    }

    fn write_extras(&mut self, leaf: &Path, extras: &[FileKind]) -> Result<()> {
        for kind in extras {
            let Some(content) = kind.static_content() else {
                continue;
            };
            let outcome =
                self.writer
                    .write(self.prompt.output(), leaf, kind.file_name(), content)?;
            self.files.push(outcome);
        }
        Ok(())
    }
}
