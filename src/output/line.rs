//! A rendered output line made of plain and emphasized segments.

use std::fmt;
use std::io;

use termcolor::{ColorSpec, WriteColor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    /// Shown in bold when the destination supports colour.
    Emphasized(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Emphasized(s) => s,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    segments: Vec<Segment>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Plain(text.into()));
        self
    }

    pub fn emphasized(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Emphasized(text.into()));
        self
    }

    pub fn is_emphasized(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Emphasized(_)))
    }

    /// Write the line followed by a newline, resetting colour after each bold run.
    pub fn write_to<W: WriteColor + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => write!(out, "{}", text)?,
                Segment::Emphasized(text) => {
                    out.set_color(ColorSpec::new().set_bold(true))?;
                    write!(out, "{}", text)?;
                    out.reset()?;
                }
            }
        }
        writeln!(out)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text())?;
        }
        Ok(())
    }
}
