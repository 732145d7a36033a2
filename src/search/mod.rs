//! Directory search: configuration, cursor state, cancellation and the walk.

mod cancel;
mod config;
mod cursor;
mod walker;

pub use cancel::CancelToken;
pub use config::Criteria;
pub use cursor::Cursor;
pub use walker::FileSearch;
