//! File location types and position-suffix parsing.
//!
//! The host hands the shim file references in the reference editor's
//! `<path>[:<line>[:<column>]]` notation. Paths may legitimately contain
//! colons, so splitting is right-anchored: only a trailing `:<digits>` or
//! `:<digits>:<digits>` run is treated as a cursor position.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// ─────────────────────────────────────────────────────────────────────────────
// FileLocation
// ─────────────────────────────────────────────────────────────────────────────

/// A file reference as extracted from the host's arguments.
///
/// The path may still be relative at this point. `column` is only ever
/// set together with `line`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    /// File path exactly as received (relative or absolute)
    pub path: String,
    /// Line number (1-based)
    pub line: Option<u32>,
    /// Column number (1-based)
    pub column: Option<u32>,
}

impl FileLocation {
    /// Create a new file location.
    ///
    /// A column without a line is meaningless in the source notation, so
    /// `column` is dropped when `line` is absent.
    pub fn new(path: impl Into<String>, line: Option<u32>, column: Option<u32>) -> Self {
        Self {
            path: path.into(),
            line,
            column: if line.is_some() { column } else { None },
        }
    }

    /// Parse a `<path>[:<line>[:<column>]]` spec.
    ///
    /// Only a trailing run of `:<digits>` or `:<digits>:<digits>` counts
    /// as a position suffix. Anything else, including embedded colons and
    /// digit runs too large for `u32`, belongs to the path.
    pub fn parse_spec(spec: &str) -> Self {
        if let Some(caps) = POSITION_SUFFIX.captures(spec) {
            let path = caps.get(1).map(|m| m.as_str()).unwrap_or(spec);
            let line: Option<u32> = caps.get(2).and_then(|m| m.as_str().parse().ok());

            // A digit run too large for u32 is not a position, and no part
            // of the suffix may be dropped silently, so any overflow makes
            // the whole string the path.
            match (line, caps.get(3)) {
                (Some(line), None) => return Self::new(path, Some(line), None),
                (Some(line), Some(col)) => {
                    if let Ok(column) = col.as_str().parse() {
                        return Self::new(path, Some(line), Some(column));
                    }
                }
                _ => {}
            }
        }

        Self::new(spec, None, None)
    }

    /// Format as `path[:line[:column]]`.
    pub fn display(&self) -> String {
        match (self.line, self.column) {
            (Some(line), Some(column)) => format!("{}:{}:{}", self.path, line, column),
            (Some(line), None) => format!("{}:{}", self.path, line),
            _ => self.path.clone(),
        }
    }
}

/// Regex splitting a spec into path and trailing position suffix.
///
/// The lazy path group anchors the split at the end of the string: the
/// engine prefers the shortest path that still leaves a valid `:line` or
/// `:line:column` tail. A left-to-right split on the first colon would
/// corrupt paths like `/tmp/weird:name/file.cs`.
static POSITION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?):(\d+)(?::(\d+))?$").expect("position suffix regex is valid")
});

// ─────────────────────────────────────────────────────────────────────────────
// ResolvedLocation
// ─────────────────────────────────────────────────────────────────────────────

/// A file location whose path has been made absolute and canonical.
///
/// Produced by the path resolver; the position fields pass through from
/// the [`FileLocation`] untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    /// Canonical absolute path (symlinks resolved, no relative segments)
    pub absolute_path: PathBuf,
    /// Line number (1-based)
    pub line: Option<u32>,
    /// Column number (1-based)
    pub column: Option<u32>,
}

impl ResolvedLocation {
    pub fn new(absolute_path: impl Into<PathBuf>, line: Option<u32>, column: Option<u32>) -> Self {
        Self {
            absolute_path: absolute_path.into(),
            line,
            column: if line.is_some() { column } else { None },
        }
    }

    /// The `:line[:column]` tail in the source notation, or an empty
    /// string when no position is present.
    pub fn position_suffix(&self) -> String {
        match (self.line, self.column) {
            (Some(line), Some(column)) => format!(":{}:{}", line, column),
            (Some(line), None) => format!(":{}", line),
            _ => String::new(),
        }
    }

    /// Whether a cursor position was requested.
    pub fn has_position(&self) -> bool {
        self.line.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.absolute_path
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
