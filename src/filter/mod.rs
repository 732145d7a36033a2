//! Entry selection: the name pattern plus the four attribute filters.
//!
//! Every filter has an "unconstrained" value that always passes. An entry is
//! selected only when all five pass.

mod kind;
mod name;
mod permissions;

use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;

pub use kind::{FileKind, TypeSet};
pub use name::{NamePattern, TOKEN_SEPARATOR, matches as name_matches};
pub use permissions::PermissionBits;

/// The attributes of an entry the filters look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryAttrs {
    pub kind: FileKind,
    pub size: u64,
    pub links: u64,
    pub permissions: PermissionBits,
}

impl EntryAttrs {
    pub fn from_metadata(meta: &Metadata) -> Self {
        Self {
            kind: FileKind::from_metadata(meta),
            size: meta.size(),
            links: meta.nlink(),
            permissions: PermissionBits::from_mode(meta.mode()),
        }
    }
}

/// All configured filters. `Default` selects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub name: NamePattern,
    /// Exact size in bytes; `None` is unconstrained.
    pub size: Option<u64>,
    /// Exact hard link count; `None` is unconstrained.
    pub links: Option<u64>,
    pub types: TypeSet,
    /// Exact permission triplets; `None` is unconstrained.
    pub permissions: Option<PermissionBits>,
}

impl Filters {
    pub fn check_name(&self, entry_name: &str) -> bool {
        self.name.matches(entry_name)
    }

    pub fn check_size(&self, size: u64) -> bool {
        self.size.is_none_or(|want| want == size)
    }

    pub fn check_links(&self, links: u64) -> bool {
        self.links.is_none_or(|want| want == links)
    }

    pub fn check_type(&self, kind: FileKind) -> bool {
        self.types.accepts(kind)
    }

    pub fn check_permissions(&self, perms: PermissionBits) -> bool {
        self.permissions.is_none_or(|want| want == perms)
    }

    /// Conjunction of all five filters.
    pub fn selects(&self, entry_name: &str, attrs: &EntryAttrs) -> bool {
        self.check_name(entry_name)
            && self.check_size(attrs.size)
            && self.check_type(attrs.kind)
            && self.check_links(attrs.links)
            && self.check_permissions(attrs.permissions)
    }
}
