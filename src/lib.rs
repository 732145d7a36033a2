//! fsearch - find files by name, size, link count, type and permissions

pub mod error;
pub mod filter;
pub mod output;
pub mod search;
pub mod signal;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ConfigError, SearchError, SearchResult, system_message};
pub use filter::{EntryAttrs, FileKind, Filters, NamePattern, PermissionBits, TypeSet};
pub use output::{ConsoleSink, Line, LineSink, MemorySink, TreeRenderer};
pub use search::{CancelToken, Criteria, Cursor, FileSearch};
