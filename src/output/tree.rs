//! Rendering of matched paths, either flat or as an indented tree.
//!
//! In tree mode only the part of a path that has not been shown yet is drawn.
//! The renderer compares the matched path, segment by segment, with the last
//! directory shown and prints the remaining segments as
//! `|<depth dashes><segment>`, one per line.

use std::borrow::Cow;
use std::fs::Metadata;
use std::io;
use std::path::Path;

use crate::filter::FileKind;
use crate::search::{Criteria, Cursor};

use super::info::{NameCache, format_info};
use super::line::Line;
use super::sink::LineSink;

/// Split a path into its non-empty `/`-separated segments.
pub fn path_segments(path: &Path) -> Vec<Cow<'_, str>> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => s
            .split('/')
            .filter(|seg| !seg.is_empty())
            .map(Cow::Borrowed)
            .collect(),
        Cow::Owned(s) => s
            .split('/')
            .filter(|seg| !seg.is_empty())
            .map(|seg| Cow::Owned(seg.to_string()))
            .collect(),
    }
}

/// Number of leading segments two paths have in common.
pub fn shared_segments(a: &Path, b: &Path) -> usize {
    path_segments(a)
        .iter()
        .zip(path_segments(b).iter())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Widest indentation unit the renderer honours.
pub const MAX_INDENT: usize = u16::MAX as usize;

// Upper bound on one connector run, reached only by very deep paths.
const MAX_DASHES: usize = 1 << 20;

pub struct TreeRenderer {
    indent: usize,
    emphasize_leaf: bool,
    verbose: bool,
    names: NameCache,
}

impl TreeRenderer {
    /// `indent == 0` selects flat mode. Larger units are clamped to [`MAX_INDENT`].
    pub fn new(indent: usize, emphasize_leaf: bool, verbose: bool) -> Self {
        Self {
            indent: indent.min(MAX_INDENT),
            emphasize_leaf,
            verbose,
            names: NameCache::new(),
        }
    }

    pub fn from_criteria(criteria: &Criteria) -> Self {
        Self::new(
            criteria.indent,
            criteria.has_filters(),
            criteria.verbose,
        )
    }

    pub fn is_flat(&self) -> bool {
        self.indent == 0
    }

    /// Show one match and advance the cursor past it.
    pub fn render<S: LineSink + ?Sized>(
        &mut self,
        cursor: &mut Cursor,
        path: &Path,
        parent: &Path,
        meta: &Metadata,
        sink: &mut S,
    ) -> io::Result<()> {
        if self.is_flat() {
            sink.emit(&self.flat_line(path, meta))?;
        } else {
            for line in self.tree_lines(cursor, path) {
                sink.emit(&line)?;
            }
        }

        cursor.record_match(path, parent, FileKind::from_metadata(meta).is_dir());
        Ok(())
    }

    /// The single line printed for a match in flat mode.
    pub fn flat_line(&mut self, path: &Path, meta: &Metadata) -> Line {
        let info = if self.verbose {
            format_info(meta, &mut self.names)
        } else {
            String::new()
        };
        Line::new().plain(format!("{}{}", info, path.display()))
    }

    /// The lines needed to show `path` given what `cursor` says is on screen.
    ///
    /// Before the first match nothing is on screen, so the first segment is
    /// printed bare as the tree's root label and every later segment gets a
    /// connector.
    pub fn tree_lines(&self, cursor: &Cursor, path: &Path) -> Vec<Line> {
        let segments = path_segments(path);
        let shared = if cursor.found_any() {
            shared_segments(path, cursor.last_shown())
        } else {
            0
        };
        let leaf = segments.len().saturating_sub(1);

        let mut lines = Vec::new();
        for (i, segment) in segments.iter().enumerate() {
            let fresh = if shared == 0 { i > 0 } else { i >= shared };
            if fresh {
                let width = i.checked_mul(self.indent).unwrap_or(usize::MAX);
                let prefix = format!("|{}", "-".repeat(width.min(MAX_DASHES)));
                let line = Line::new().plain(prefix);
                lines.push(if i == leaf && self.emphasize_leaf {
                    line.emphasized(segment.to_string())
                } else {
                    line.plain(segment.to_string())
                });
            } else if shared == 0 {
                lines.push(Line::new().plain(segment.to_string()));
            }
        }
        lines
    }
}
