//! Owner/group/other permission triplets.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

const PERM_LEN: usize = 9;

/// The nine `rwxrwxrwx` bits of a mode, i.e. `mode & 0o777`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PermissionBits(u16);

impl PermissionBits {
    pub fn from_mode(mode: u32) -> Self {
        Self((mode & 0o777) as u16)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    /// Three digits, one per class, each the sum of r=4, w=2, x=1.
    pub fn to_digits(self) -> String {
        format!("{}{}{}", self.triplet(6), self.triplet(3), self.triplet(0))
    }

    /// The familiar `rwxr-xr--` rendering.
    pub fn to_rwx(self) -> String {
        let mut out = String::with_capacity(PERM_LEN);
        for shift in [6, 3, 0] {
            let t = self.triplet(shift);
            out.push(if t & 4 != 0 { 'r' } else { '-' });
            out.push(if t & 2 != 0 { 'w' } else { '-' });
            out.push(if t & 1 != 0 { 'x' } else { '-' });
        }
        out
    }

    fn triplet(self, shift: u16) -> u16 {
        (self.0 >> shift) & 0o7
    }
}

fn decode_triplet(part: &[u8]) -> Option<u16> {
    let mut value = 0;
    for (c, (letter, weight)) in part.iter().zip([(b'r', 4), (b'w', 2), (b'x', 1)]) {
        if *c == letter {
            value += weight;
        } else if *c != b'-' {
            return None;
        }
    }
    Some(value)
}

impl FromStr for PermissionBits {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidPermission(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != PERM_LEN {
            return Err(invalid());
        }

        let mut bits = 0;
        for chunk in bytes.chunks(3) {
            bits = (bits << 3) | decode_triplet(chunk).ok_or_else(invalid)?;
        }
        Ok(Self(bits))
    }
}

impl fmt::Display for PermissionBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_digits())
    }
}
