//! Output formatting for search results
//!
//! - `TreeRenderer`: turns a match into lines, flat or as an indented tree
//! - `LineSink`: where lines go; `ConsoleSink` for stdout plus an optional
//!   copy file, `MemorySink` for collecting them

mod info;
mod line;
mod sink;
mod tree;

pub use info::{NameCache, format_access_time, format_info, format_size, type_char};
pub use line::{Line, Segment};
pub use sink::{ConsoleSink, LineSink, MemorySink};
pub use tree::{TreeRenderer, path_segments, shared_segments};
