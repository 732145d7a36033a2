//! File type classification and the configured set of wanted types.

use std::fmt;
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;
use std::str::FromStr;

use nix::libc::mode_t;
use nix::sys::stat::SFlag;

use crate::error::ConfigError;

/// The kind of a directory entry, taken from its own (not followed) metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Regular,
    BlockDevice,
    CharDevice,
    Directory,
    Symlink,
    Socket,
    Pipe,
    Unknown,
}

impl FileKind {
    /// All kinds a type filter can select.
    pub const SELECTABLE: [FileKind; 7] = [
        FileKind::BlockDevice,
        FileKind::CharDevice,
        FileKind::Directory,
        FileKind::Regular,
        FileKind::Symlink,
        FileKind::Pipe,
        FileKind::Socket,
    ];

    pub fn from_metadata(meta: &Metadata) -> Self {
        Self::from_mode(meta.mode())
    }

    /// Classify raw `st_mode` bits.
    pub fn from_mode(mode: u32) -> Self {
        let format = SFlag::from_bits_truncate(mode as mode_t) & SFlag::S_IFMT;
        [
            (SFlag::S_IFBLK, FileKind::BlockDevice),
            (SFlag::S_IFCHR, FileKind::CharDevice),
            (SFlag::S_IFDIR, FileKind::Directory),
            (SFlag::S_IFIFO, FileKind::Pipe),
            (SFlag::S_IFLNK, FileKind::Symlink),
            (SFlag::S_IFREG, FileKind::Regular),
            (SFlag::S_IFSOCK, FileKind::Socket),
        ]
        .into_iter()
        .find(|(flag, _)| *flag == format)
        .map_or(FileKind::Unknown, |(_, kind)| kind)
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'b' => Some(FileKind::BlockDevice),
            'c' => Some(FileKind::CharDevice),
            'd' => Some(FileKind::Directory),
            'f' => Some(FileKind::Regular),
            'l' => Some(FileKind::Symlink),
            'p' => Some(FileKind::Pipe),
            's' => Some(FileKind::Socket),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            FileKind::BlockDevice => 'b',
            FileKind::CharDevice => 'c',
            FileKind::Directory => 'd',
            FileKind::Regular => 'f',
            FileKind::Symlink => 'l',
            FileKind::Pipe => 'p',
            FileKind::Socket => 's',
            FileKind::Unknown => 'u',
        }
    }

    pub fn is_dir(self) -> bool {
        self == FileKind::Directory
    }

    fn bit(self) -> u8 {
        match self {
            FileKind::Regular => 1 << 0,
            FileKind::BlockDevice => 1 << 1,
            FileKind::CharDevice => 1 << 2,
            FileKind::Directory => 1 << 3,
            FileKind::Symlink => 1 << 4,
            FileKind::Socket => 1 << 5,
            FileKind::Pipe => 1 << 6,
            FileKind::Unknown => 0,
        }
    }
}

/// Set of wanted file kinds. An empty set imposes no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeSet(u8);

impl TypeSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, kind: FileKind) {
        self.0 |= kind.bit();
    }

    pub fn contains(self, kind: FileKind) -> bool {
        let bit = kind.bit();
        bit != 0 && self.0 & bit == bit
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when unconstrained or when `kind` was asked for.
    pub fn accepts(self, kind: FileKind) -> bool {
        self.is_empty() || self.contains(kind)
    }
}

impl FromStr for TypeSet {
    type Err = ConfigError;

    fn from_str(letters: &str) -> Result<Self, Self::Err> {
        let mut set = TypeSet::empty();
        for c in letters.chars() {
            let kind = FileKind::from_letter(c).ok_or(ConfigError::InvalidFileType(c))?;
            set.insert(kind);
        }
        Ok(set)
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in FileKind::SELECTABLE {
            if self.contains(kind) {
                write!(f, "{}", kind.letter())?;
            }
        }
        Ok(())
    }
}
