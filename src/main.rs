//! CLI entry point for fsearch

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use fsearch::signal::install_interrupt_handler;
use fsearch::{
    CancelToken, ConsoleSink, Criteria, Cursor, FileSearch, Filters, NamePattern, PermissionBits,
    TypeSet,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const AFTER_HELP: &str = "\
File types (*):
   b: block device
   c: character device
   d: directory
   f: regular file
   l: symbolic link
   p: pipe
   s: socket

Notes:
   1) <file_name> supports '+' to join name parts, e.g. lost+file matches
      lostfile and lostttfile
   2) <file_type> accepts one or more types, e.g. -t ldb

Example: fsearch -d targetDirectoryPath -f lost+file -b 100 -t b";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fsearch")]
#[command(about = "Advanced file search: find entries by name, size, links, type and permissions")]
#[command(version)]
#[command(after_help = AFTER_HELP)]
struct Args {
    /// Target directory path
    #[arg(short = 'd', value_name = "target_path", default_value = ".")]
    directory: PathBuf,

    /// Target file name (case insensitive)
    #[arg(short = 'f', value_name = "file_name")]
    name: Option<String>,

    /// Target file size in bytes
    #[arg(short = 'b', value_name = "file_size", allow_negative_numbers = true)]
    size: Option<i64>,

    /// Target file link count
    #[arg(short = 'l', value_name = "link_count", allow_negative_numbers = true)]
    links: Option<i64>,

    /// Target file type (*)
    #[arg(short = 't', value_name = "file_type")]
    types: Option<TypeSet>,

    /// Target file permissions (e.g. 'rwxr-xr--')
    #[arg(short = 'p', value_name = "permissions")]
    permissions: Option<PermissionBits>,

    /// Draw a tree, indenting each level by this many dashes
    #[arg(
        short = 'i',
        value_name = "indentation",
        default_value_t = 0,
        value_parser = clap::value_parser!(u16)
    )]
    indent: u16,

    /// Also append output to this file
    #[arg(short = 'o', value_name = "file_path")]
    output: Option<PathBuf>,

    /// Recursive search target directory
    #[arg(short = 'r')]
    recursive: bool,

    /// Display additional information (verbose)
    #[arg(short = 'v')]
    verbose: bool,

    /// Control emphasis output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    /// Number of filter options given on the command line.
    fn criteria_count(&self) -> usize {
        [
            self.name.is_some(),
            self.size.is_some(),
            self.links.is_some(),
            self.types.is_some(),
            self.permissions.is_some(),
        ]
        .into_iter()
        .filter(|given| *given)
        .count()
    }

    fn to_criteria(&self) -> Criteria {
        // Negative sizes and link counts, an empty type list and an all-dash
        // permission string all mean "any".
        let filters = Filters {
            name: self.name.as_deref().map(NamePattern::new).unwrap_or_default(),
            size: self.size.and_then(|n| u64::try_from(n).ok()),
            links: self.links.and_then(|n| u64::try_from(n).ok()),
            types: self.types.unwrap_or_default(),
            permissions: self.permissions.filter(|p| p.bits() != 0),
        };

        Criteria {
            root: self.directory.clone(),
            filters,
            indent: usize::from(self.indent),
            recursive: self.recursive,
            verbose: self.verbose,
            output: self.output.clone(),
            criteria_count: self.criteria_count(),
        }
    }
}

fn main() {
    let args = Args::parse();

    // Diagnostics go to stderr and are off unless RUST_LOG asks for them
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let criteria = args.to_criteria();
    tracing::debug!(?criteria, "parsed arguments");

    let cancel = CancelToken::new();
    if let Err(e) = install_interrupt_handler(&cancel) {
        eprintln!("fsearch: warning: cannot handle interrupts: {}", e);
    }

    let mut sink = ConsoleSink::new(should_use_color(args.color), criteria.output.clone());
    let mut cursor = Cursor::new(&criteria.root);
    let result = FileSearch::new(&criteria)
        .with_cancel(cancel.clone())
        .run(&mut cursor, &mut sink);

    if cancel.is_cancelled() {
        println!("\nInterrupted with signal: SIGINT");
    }

    if let Err(e) = result {
        eprintln!("fsearch: {}", e);
        process::exit(1);
    }

    if !cursor.found_any() {
        println!("No file found");
        process::exit(1);
    }
}
