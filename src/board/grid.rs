//! Square, row-major grid of cells and its expansion rules.

use super::tile::{Tile, TileId};

/// Side length of a freshly rendered grid.
pub const INITIAL_SIZE: usize = 17;

/// How many rows or columns an expansion adds.
pub const GROWTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

impl Direction {
    /// Row and column shift applied to existing cells when growing towards
    /// `self`. Growth on the left or top pushes old cells away from that side;
    /// growth on the right or bottom appends past the old extent.
    pub fn offset(self) -> (usize, usize) {
        match self {
            Direction::Left => (0, GROWTH),
            Direction::Top => (GROWTH, 0),
            Direction::Right | Direction::Bottom => (0, 0),
        }
    }

    /// New flat index of the cell at `index` in a grid of side `old_size`.
    pub fn remap(self, index: usize, old_size: usize) -> usize {
        let new_size = old_size + GROWTH;
        let (row, col) = (index / old_size, index % old_size);
        let (dr, dc) = self.offset();
        (row + dr) * new_size + col + dc
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Default for Grid {
    fn default() -> Self { Self::new(INITIAL_SIZE) }
}

impl Grid {
    /// `size * size` empty cells.
    pub fn new(size: usize) -> Self {
        Self { size, cells: vec![None; size * size] }
    }

    pub fn size(&self) -> usize { self.size }

    /// Number of cells.
    pub fn len(&self) -> usize { self.cells.len() }

    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.cells.get(index).and_then(Option::as_ref)
    }

    pub fn position(&self, id: TileId) -> Option<usize> {
        self.cells
            .iter()
            .position(|c| c.as_ref().is_some_and(|t| t.id == id))
    }

    /// Occupied cells in index order.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, &Tile)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|t| (i, t)))
    }

    pub(crate) fn put(&mut self, index: usize, tile: Tile) {
        self.cells[index] = Some(tile);
    }

    pub(crate) fn take(&mut self, index: usize) -> Option<Tile> {
        self.cells.get_mut(index).and_then(Option::take)
    }

    /// Which way to grow when a tile lands on `index`, if it sits on the
    /// border. Columns are checked before rows, so corners grow sideways.
    pub fn border_direction(&self, index: usize) -> Option<Direction> {
        if index >= self.len() {
            return None;
        }
        let (row, col) = (index / self.size, index % self.size);
        let last = self.size - 1;
        if col == 0 {
            Some(Direction::Left)
        } else if col == last {
            Some(Direction::Right)
        } else if row == 0 {
            Some(Direction::Top)
        } else if row == last {
            Some(Direction::Bottom)
        } else {
            None
        }
    }

    /// A grid `GROWTH` cells wider and taller, with every tile carried to its
    /// remapped index. New positions start empty.
    pub fn expanded(&self, direction: Direction) -> Grid {
        let mut next = Grid::new(self.size + GROWTH);
        for (index, tile) in self.tiles() {
            next.put(direction.remap(index, self.size), *tile);
        }
        next
    }
}
