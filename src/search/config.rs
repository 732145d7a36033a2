//! Configuration for one search.

use std::path::PathBuf;

use crate::filter::Filters;

/// Everything a search needs to know: where to start, what to select and how
/// to show it.
#[derive(Debug, Clone)]
pub struct Criteria {
    pub root: PathBuf,
    pub filters: Filters,
    /// Width of one tree level; 0 prints flat paths instead of a tree.
    pub indent: usize,
    pub recursive: bool,
    /// Prefix flat lines with type, permissions, links, owner, size and atime.
    pub verbose: bool,
    /// File that receives a copy of every printed line.
    pub output: Option<PathBuf>,
    /// How many filter options were given. Matched leaves are emphasized in
    /// the tree only when this is non-zero.
    pub criteria_count: usize,
}

impl Criteria {
    pub fn has_filters(&self) -> bool {
        self.criteria_count > 0
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            filters: Filters::default(),
            indent: 0,
            recursive: false,
            verbose: false,
            output: None,
            criteria_count: 0,
        }
    }
}
