use std::fmt;

use crate::letters::Letter;

/// Board-local tile identifier, rendered as `tile-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub(crate) u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub letter: Letter,
}

/// Where a tile currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Tray,
    Cell(usize),
}

/// What a drag carries from its source to the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub id: TileId,
    pub letter: Letter,
}

impl From<Tile> for DragPayload {
    fn from(t: Tile) -> Self { Self { id: t.id, letter: t.letter } }
}
