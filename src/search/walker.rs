//! FileSearch - depth-first walk that renders matches as it goes

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{SearchError, SearchResult};
use crate::filter::EntryAttrs;
use crate::output::{LineSink, TreeRenderer};

use super::cancel::CancelToken;
use super::config::Criteria;
use super::cursor::Cursor;

/// Why a directory could not be finished.
enum DirError {
    /// The directory itself could not be opened.
    Open(io::Error),
    /// The sink refused a line; this ends the whole search.
    Output(io::Error),
}

/// Sequential, depth-first search over one directory tree.
///
/// Entries are visited in the order the filesystem returns them. Metadata is
/// read without following symlinks, so a link to a directory is reported as a
/// link and never descended into.
pub struct FileSearch<'a> {
    criteria: &'a Criteria,
    cancel: CancelToken,
}

impl<'a> FileSearch<'a> {
    pub fn new(criteria: &'a Criteria) -> Self {
        Self {
            criteria,
            cancel: CancelToken::new(),
        }
    }

    /// Stop at the next entry once `cancel` fires.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Walk from `criteria.root`, rendering every selected entry into `sink`.
    ///
    /// Only a root that cannot be opened, or a sink that fails, is an error.
    /// Problems with individual entries go to [`LineSink::report_error`].
    pub fn run<S: LineSink + ?Sized>(&self, cursor: &mut Cursor, sink: &mut S) -> SearchResult<()> {
        let mut renderer = TreeRenderer::from_criteria(self.criteria);
        let root = self.criteria.root.as_path();

        match self.walk_dir(root, cursor, &mut renderer, sink) {
            Ok(()) => Ok(()),
            Err(DirError::Open(source)) => Err(SearchError::RootOpen {
                path: root.to_path_buf(),
                source,
            }),
            Err(DirError::Output(e)) => Err(SearchError::Output(e)),
        }
    }

    fn walk_dir<S: LineSink + ?Sized>(
        &self,
        dir: &Path,
        cursor: &mut Cursor,
        renderer: &mut TreeRenderer,
        sink: &mut S,
    ) -> Result<(), DirError> {
        let entries = fs::read_dir(dir).map_err(DirError::Open)?;
        debug!(dir = %dir.display(), "scanning");

        for entry in entries {
            if self.cancel.is_cancelled() {
                debug!(dir = %dir.display(), "cancelled");
                break;
            }

            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    sink.report_error(dir, &e);
                    continue;
                }
            };

            let name = entry.file_name();
            let path = dir.join(&name);

            let meta = match fs::symlink_metadata(&path) {
                Ok(m) => m,
                Err(e) => {
                    sink.report_error(&path, &e);
                    continue;
                }
            };
            let attrs = EntryAttrs::from_metadata(&meta);

            if self
                .criteria
                .filters
                .selects(&name.to_string_lossy(), &attrs)
            {
                renderer
                    .render(cursor, &path, dir, &meta, sink)
                    .map_err(DirError::Output)?;
            } else {
                trace!(path = %path.display(), "not selected");
            }

            if self.criteria.recursive && attrs.kind.is_dir() {
                match self.walk_dir(&path, cursor, renderer, sink) {
                    Ok(()) => {}
                    // A subtree that cannot be opened is reported against the
                    // directory that contains it.
                    Err(DirError::Open(e)) => sink.report_error(dir, &e),
                    Err(output) => return Err(output),
                }
            }
        }

        Ok(())
    }
}
