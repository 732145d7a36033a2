//! What the tree renderer has already shown.

use std::path::{Path, PathBuf};

/// Progress of one search: the directory most recently shown and whether
/// anything matched at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    last_shown: PathBuf,
    found_any: bool,
}

impl Cursor {
    /// Start a search rooted at `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            last_shown: root.to_path_buf(),
            found_any: false,
        }
    }

    pub fn last_shown(&self) -> &Path {
        &self.last_shown
    }

    pub fn found_any(&self) -> bool {
        self.found_any
    }

    /// Record a shown match. Directories become the new reference point;
    /// anything else leaves its parent directory as the reference.
    pub fn record_match(&mut self, path: &Path, parent: &Path, is_dir: bool) {
        self.found_any = true;
        self.last_shown = if is_dir { path } else { parent }.to_path_buf();
    }
}
