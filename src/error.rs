//! Error types for fsearch.
//!
//! Only two kinds of failure ever reach the caller of a search: the root
//! directory could not be opened, or stdout stopped accepting output. Every
//! other problem met during the walk is reported on stderr and skipped.

use std::io;
use std::path::PathBuf;

use nix::errno::Errno;

/// The system's message for `err`, without the `(os error N)` suffix.
pub fn system_message(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => Errno::from_raw(code).desc().to_string(),
        None => err.to_string(),
    }
}

/// Failure of a whole search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The directory the search started from could not be opened.
    #[error("'{}': {}", .path.display(), system_message(.source))]
    RootOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a rendered line to the primary output failed.
    #[error("error writing output: {}", system_message(.0))]
    Output(#[from] io::Error),
}

/// Invalid option value supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("'{0}': invalid file type")]
    InvalidFileType(char),

    #[error("'{0}': invalid permission")]
    InvalidPermission(String),
}

pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_open_displays_path_and_cause() {
        let err = SearchError::RootOpen {
            path: PathBuf::from("/missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "'/missing': No such file or directory");
    }

    #[test]
    fn os_errors_lose_the_code_suffix() {
        let denied = io::Error::from_raw_os_error(Errno::EACCES as i32);
        assert!(denied.to_string().contains("os error"));
        assert_eq!(system_message(&denied), "Permission denied");

        let custom = io::Error::other("pipe closed");
        assert_eq!(system_message(&custom), "pipe closed");

        let err = SearchError::RootOpen {
            path: PathBuf::from("/missing"),
            source: io::Error::from_raw_os_error(Errno::ENOENT as i32),
        };
        assert_eq!(err.to_string(), "'/missing': No such file or directory");
    }

    #[test]
    fn output_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: SearchError = io_err.into();
        assert!(matches!(err, SearchError::Output(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn config_errors_quote_the_value() {
        assert_eq!(
            ConfigError::InvalidFileType('z').to_string(),
            "'z': invalid file type"
        );
        assert_eq!(
            ConfigError::InvalidPermission("rwx".to_string()).to_string(),
            "'rwx': invalid permission"
        );
    }
}
