//! Client-side board: the grid, the tray, and the drag/drop rules that move
//! tiles between them.
//!
//! `Board` is plain state. Every operation takes `&mut self`, so the same
//! rules drive the headless player and the unit tests without a DOM.

pub mod grid;
pub mod tile;
pub mod validate;

pub use grid::{Direction, Grid, GROWTH, INITIAL_SIZE};
pub use tile::{DragPayload, Location, Tile, TileId};
pub use validate::{AcceptAll, WordValidator};

use crate::letters::Letter;
use crate::protocol::ServerEvent;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("unknown tile {0}")]
    UnknownTile(TileId),
    #[error("tile {id} holds {actual}, not {claimed}")]
    LetterMismatch { id: TileId, claimed: Letter, actual: Letter },
    #[error("cell {index} outside a grid of {cells} cells")]
    CellOutOfRange { index: usize, cells: usize },
}

/// What happened to the dragged tile on a grid drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Landed on an empty cell. `index` is its position after any expansion.
    Placed { index: usize, expanded: Option<Direction> },
    /// Target was occupied; the tile went back to the tray.
    Returned,
    /// Dropped onto the cell it already occupies.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropReport {
    pub outcome: DropOutcome,
    /// Tray is empty and the layout validates: time to ask for a new tile.
    pub peel: bool,
}

#[derive(Debug, Clone)]
pub struct Board<V = AcceptAll> {
    grid: Grid,
    tray: Vec<Tile>,
    next_id: u64,
    dragging: Option<TileId>,
    validator: V,
}

impl Default for Board<AcceptAll> {
    fn default() -> Self { Self::new() }
}

impl Board<AcceptAll> {
    pub fn new() -> Self { Self::with_validator(AcceptAll) }
}

impl<V: WordValidator> Board<V> {
    pub fn with_validator(validator: V) -> Self {
        Self {
            grid: Grid::default(),
            tray: Vec::new(),
            next_id: 0,
            dragging: None,
            validator,
        }
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn size(&self) -> usize { self.grid.size() }

    pub fn tray(&self) -> &[Tile] { &self.tray }

    pub fn dragging(&self) -> Option<TileId> { self.dragging }

    pub fn placed_count(&self) -> usize { self.grid.tiles().count() }

    pub fn words_valid(&self) -> bool { self.validator.validate(&self.grid) }

    /// Discard every cell (and whatever they held) and start over with
    /// `size * size` empty ones.
    pub fn render_grid(&mut self, size: usize) {
        self.grid = Grid::new(size);
    }

    /// Replace the tray with one fresh tile per letter, in order.
    pub fn populate_tray(&mut self, letters: &[Letter]) -> Vec<TileId> {
        self.tray.clear();
        letters.iter().map(|l| self.add_tile(*l)).collect()
    }

    /// Append one fresh tile to the tray.
    pub fn add_tile(&mut self, letter: Letter) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        self.tray.push(Tile { id, letter });
        id
    }

    /// Feed a server event into the board.
    pub fn apply(&mut self, event: &ServerEvent) {
        match event {
            ServerEvent::InitialTiles(letters) => {
                self.populate_tray(letters);
            }
            ServerEvent::NewTile(letter) => {
                self.add_tile(*letter);
            }
            ServerEvent::Error { message } => {
                tracing::warn!(%message, "server reported an error");
            }
        }
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tray
            .iter()
            .chain(self.grid.tiles().map(|(_, t)| t))
            .find(|t| t.id == id)
    }

    pub fn locate(&self, id: TileId) -> Option<Location> {
        if self.tray.iter().any(|t| t.id == id) {
            return Some(Location::Tray);
        }
        self.grid.position(id).map(Location::Cell)
    }

    pub fn drag_start(&mut self, id: TileId) -> Result<DragPayload, BoardError> {
        let tile = *self.tile(id).ok_or(BoardError::UnknownTile(id))?;
        self.dragging = Some(id);
        Ok(tile.into())
    }

    pub fn drag_end(&mut self) {
        self.dragging = None;
    }

    /// Drop the dragged tile onto cell `index`.
    ///
    /// An occupied target is never overwritten: the dragged tile goes back to
    /// the tray instead. A placement on the border grows the grid.
    pub fn drop_on_cell(&mut self, payload: &DragPayload, index: usize) -> Result<DropReport, BoardError> {
        if index >= self.grid.len() {
            return Err(BoardError::CellOutOfRange { index, cells: self.grid.len() });
        }
        self.check(payload)?;

        let outcome = match self.grid.get(index).map(|t| t.id) {
            // nothing moved, so nothing to peel for
            Some(occupant) if occupant == payload.id => {
                return Ok(DropReport { outcome: DropOutcome::Unchanged, peel: false });
            }
            Some(_) => {
                let tile = self.detach(payload.id)?;
                self.tray.push(tile);
                DropOutcome::Returned
            }
            None => {
                let tile = self.detach(payload.id)?;
                self.grid.put(index, tile);
                match self.grid.border_direction(index) {
                    Some(direction) => {
                        let old_size = self.grid.size();
                        self.grid = self.grid.expanded(direction);
                        tracing::debug!(?direction, size = self.grid.size(), "grid expanded");
                        DropOutcome::Placed {
                            index: direction.remap(index, old_size),
                            expanded: Some(direction),
                        }
                    }
                    None => DropOutcome::Placed { index, expanded: None },
                }
            }
        };

        let peel = self.tray.is_empty() && self.words_valid();
        Ok(DropReport { outcome, peel })
    }

    /// Move the dragged tile to the end of the tray, wherever it was.
    pub fn drop_on_tray(&mut self, payload: &DragPayload) -> Result<(), BoardError> {
        self.check(payload)?;
        let tile = self.detach(payload.id)?;
        self.tray.push(tile);
        Ok(())
    }

    /// First empty cell scanning row-major from the centre of the grid,
    /// wrapping around to the top.
    pub fn next_free_cell(&self) -> Option<usize> {
        let size = self.grid.size();
        let centre = (size / 2) * size + size / 2;
        (centre..self.grid.len())
            .chain(0..centre)
            .find(|i| self.grid.get(*i).is_none())
    }

    /// Drag every tray tile onto the next free cell. Returns whether the
    /// final drop asked for a peel.
    pub fn lay_out_tray(&mut self) -> Result<bool, BoardError> {
        let mut peel = false;
        while let Some(tile) = self.tray.first().copied() {
            let Some(cell) = self.next_free_cell() else { break };
            let payload = self.drag_start(tile.id)?;
            let report = self.drop_on_cell(&payload, cell)?;
            self.drag_end();
            peel = report.peel;
        }
        Ok(peel)
    }

    fn check(&self, payload: &DragPayload) -> Result<(), BoardError> {
        let tile = self.tile(payload.id).ok_or(BoardError::UnknownTile(payload.id))?;
        if tile.letter != payload.letter {
            return Err(BoardError::LetterMismatch {
                id: payload.id,
                claimed: payload.letter,
                actual: tile.letter,
            });
        }
        Ok(())
    }

    fn detach(&mut self, id: TileId) -> Result<Tile, BoardError> {
        if let Some(pos) = self.tray.iter().position(|t| t.id == id) {
            return Ok(self.tray.remove(pos));
        }
        self.grid
            .position(id)
            .and_then(|idx| self.grid.take(idx))
            .ok_or(BoardError::UnknownTile(id))
    }
}
