//! Connection identifiers.

use std::fmt;

use ulid::Ulid;

/// Server-side handle for one socket. Never sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(Ulid);

impl ClientId {
    /// Full 26-char ULID; the random tail keeps ids from the same
    /// millisecond apart.
    pub fn new() -> Self { Self(Ulid::new()) }
}

impl Default for ClientId {
    fn default() -> Self { Self::new() }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
