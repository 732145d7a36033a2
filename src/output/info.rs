//! The `ls -l` style prefix shown in verbose flat mode.

use std::collections::HashMap;
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;

use chrono::{DateTime, Local};
use nix::unistd::{Gid, Group, Uid, User};

use crate::filter::{EntryAttrs, FileKind};

const SIZE_WIDTH: usize = 10;
const TIME_FORMAT: &str = "%b %e %H:%M";

/// Caches uid/gid to name lookups for the lifetime of one search.
#[derive(Debug, Default)]
pub struct NameCache {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl NameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for `uid`, or an empty string when it has no passwd entry.
    pub fn user(&mut self, uid: u32) -> &str {
        self.users.entry(uid).or_insert_with(|| {
            User::from_uid(Uid::from_raw(uid))
                .ok()
                .flatten()
                .map(|u| u.name)
                .unwrap_or_default()
        })
    }

    pub fn group(&mut self, gid: u32) -> &str {
        self.groups.entry(gid).or_insert_with(|| {
            Group::from_gid(Gid::from_raw(gid))
                .ok()
                .flatten()
                .map(|g| g.name)
                .unwrap_or_default()
        })
    }
}

/// Type letter as shown in listings: regular files show as `-`.
pub fn type_char(kind: FileKind) -> char {
    match kind {
        FileKind::Regular => '-',
        other => other.letter(),
    }
}

/// Last access time as `Mmm dd hh:mm` in local time.
pub fn format_access_time(meta: &Metadata) -> String {
    DateTime::from_timestamp(meta.atime(), meta.atime_nsec() as u32)
        .map(|t| t.with_timezone(&Local).format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

/// Size right-aligned in a fixed field. A zero size leaves the field blank.
pub fn format_size(size: u64) -> String {
    if size == 0 {
        " ".repeat(SIZE_WIDTH)
    } else {
        format!("{:>width$}", size, width = SIZE_WIDTH)
    }
}

/// Build the info block, trailing space included, so the path can follow it.
pub fn format_info(meta: &Metadata, names: &mut NameCache) -> String {
    let attrs = EntryAttrs::from_metadata(meta);
    let owner = names.user(meta.uid()).to_string();
    let group = names.group(meta.gid()).to_string();

    format!(
        "{}{}  {}  {}  {}  {} [{}] ",
        type_char(attrs.kind),
        attrs.permissions.to_rwx(),
        attrs.links,
        owner,
        group,
        format_size(attrs.size),
        format_access_time(meta),
    )
}
