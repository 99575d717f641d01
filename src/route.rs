//! Route input parsing.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::identifier::identifier;

/// A non-empty list of route segments, e.g. `blog/post` -> `["blog", "post"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    segments: Vec<String>,
}

impl Route {
    /// Parses operator input into a route.
    ///
    /// Empty segments are dropped, so `/blog//post/` equals `blog/post`.
    /// Returns `None` when no segment remains.
    pub fn parse(input: &str) -> Option<Self> {
        let segments: Vec<String> = input
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// Number of nested directories the route produces.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Iterates over every prefix of the route, shortest first.
    pub fn prefixes(&self) -> impl Iterator<Item = RoutePrefix<'_>> {
        (1..=self.segments.len()).map(|depth| RoutePrefix {
            segments: &self.segments[..depth],
        })
    }

    /// Directory of the deepest segment below `base`.
    pub fn leaf_dir(&self, base: &Path) -> PathBuf {
        self.segments.iter().fold(base.to_path_buf(), |dir, s| dir.join(s))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// The first `n` segments of a [`Route`].
#[derive(Debug, Clone, Copy)]
pub struct RoutePrefix<'a> {
    segments: &'a [String],
}

impl RoutePrefix<'_> {
    /// The segment added at this depth.
    pub fn last(&self) -> &str {
        // Prefixes always hold at least one segment
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Human-readable path, e.g. `blog/post`.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    pub fn identifier(&self) -> String {
        identifier(self.segments)
    }
}
