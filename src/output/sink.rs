//! Destinations for rendered lines and per-entry error reports.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use termcolor::{Ansi, ColorChoice, NoColor, StandardStream};

use crate::error::system_message;

use super::line::Line;

/// Receives every line the search produces.
pub trait LineSink {
    fn emit(&mut self, line: &Line) -> io::Result<()>;

    /// Called for entries that could not be inspected or entered. The search
    /// continues afterwards.
    fn report_error(&mut self, path: &Path, error: &io::Error) {
        eprintln!("fsearch: '{}': {}", path.display(), system_message(error));
    }
}

/// Writes to stdout and optionally appends a copy of each line to a file.
pub struct ConsoleSink {
    stdout: StandardStream,
    use_color: bool,
    tee: Option<PathBuf>,
}

impl ConsoleSink {
    pub fn new(use_color: bool, tee: Option<PathBuf>) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
            use_color,
            tee,
        }
    }

    /// Append one line to the tee file. The file is opened per line and any
    /// failure is ignored; the copy never fails the search.
    fn tee_line(&self, path: &Path, line: &Line) {
        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::trace!(path = %path.display(), error = %e, "skipping output file");
                return;
            }
        };

        let written = if self.use_color {
            line.write_to(&mut Ansi::new(file))
        } else {
            line.write_to(&mut NoColor::new(file))
        };
        if let Err(e) = written {
            tracing::trace!(path = %path.display(), error = %e, "output file write failed");
        }
    }
}

impl LineSink for ConsoleSink {
    fn emit(&mut self, line: &Line) -> io::Result<()> {
        line.write_to(&mut self.stdout)?;
        if let Some(path) = &self.tee {
            self.tee_line(path, line);
        }
        Ok(())
    }
}

/// Keeps lines and errors in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<Line>,
    errors: Vec<(PathBuf, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The lines as plain text, without emphasis.
    pub fn text(&self) -> Vec<String> {
        self.lines.iter().map(Line::to_string).collect()
    }

    /// Paths and messages passed to `report_error`.
    pub fn errors(&self) -> &[(PathBuf, String)] {
        &self.errors
    }
}

impl LineSink for MemorySink {
    fn emit(&mut self, line: &Line) -> io::Result<()> {
        self.lines.push(line.clone());
        Ok(())
    }

    fn report_error(&mut self, path: &Path, error: &io::Error) {
        self.errors.push((path.to_path_buf(), system_message(error)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects() {
        let mut sink = MemorySink::new();
        sink.emit(&Line::new().plain("one")).unwrap();
        sink.emit(&Line::new().plain("|--").emphasized("two")).unwrap();
        sink.report_error(
            Path::new("./locked"),
            &io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        );

        assert_eq!(sink.text(), vec!["one", "|--two"]);
        assert!(sink.lines()[1].is_emphasized());
        assert_eq!(sink.errors().len(), 1);
        assert_eq!(sink.errors()[0].0, PathBuf::from("./locked"));
    }

    #[test]
    fn test_reported_errors_use_bare_system_text() {
        let mut sink = MemorySink::new();
        sink.report_error(Path::new("./locked"), &io::Error::from_raw_os_error(13));
        assert_eq!(sink.errors()[0].1, "Permission denied");
    }

    #[test]
    fn test_console_sink_appends_to_tee_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        std::fs::write(&out, "existing\n").unwrap();

        let mut sink = ConsoleSink::new(false, Some(out.clone()));
        sink.emit(&Line::new().plain("first")).unwrap();
        sink.emit(&Line::new().plain("|--").emphasized("second")).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content, "existing\nfirst\n|--second\n");
    }

    #[test]
    fn test_console_sink_ignores_unopenable_tee() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing-dir").join("out.txt");

        let mut sink = ConsoleSink::new(false, Some(out.clone()));
        assert!(sink.emit(&Line::new().plain("line")).is_ok());
        assert!(!out.exists());
    }
}
