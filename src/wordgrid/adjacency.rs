use super::board::LetterGrid;
use super::util::{Direction, Position};

/// One grid position, its letter and the arena indices of the cells bordering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub pos: Position,
    pub letter: u8,
    /// Indexed by `Direction::as_index`. Empty slots are off the grid (or diagonals when they
    /// are disabled).
    slots: [Option<usize>; 8],
}

impl Cell {
    pub fn neighbour(&self, dir: Direction) -> Option<usize> {
        self.slots[dir.as_index()]
    }

    /// Neighbour at a raw slot. Lets a search resume from where it left off.
    pub fn slot(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied().flatten()
    }

    /// Bordering cells in search order: top, left, right, bottom, then the diagonals
    pub fn neighbours(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().filter_map(|s| *s)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.letter as char, self.pos)
    }
}

/// Arena of cells with their precomputed neighbourhoods. Built once per grid and read-only
/// afterwards, so it can be shared freely between search workers.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl AdjacencyGraph {
    pub fn build(grid: &LetterGrid, diagonals: bool) -> Self {
        let width = grid.width();
        let height = grid.height();
        let cells = grid
            .positions()
            .map(|pos| {
                let mut slots = [None; 8];
                for &dir in Direction::iter(diagonals) {
                    slots[dir.as_index()] =
                        pos.next(dir, width, height).map(|n| n.as_index(width));
                }
                Cell {
                    pos,
                    letter: grid[pos],
                    slots,
                }
            })
            .collect();

        Self {
            cells,
            width,
            height,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub fn cell_at(&self, pos: Position) -> Option<&Cell> {
        if pos.x < self.width && pos.y < self.height {
            self.cells.get(pos.as_index(self.width))
        } else {
            None
        }
    }

    /// Ordered neighbour positions of the cell at `pos`
    pub fn neighbours_of(&self, pos: Position) -> Vec<Position> {
        self.cell_at(pos)
            .map(|cell| cell.neighbours().map(|i| self.cells[i].pos).collect())
            .unwrap_or_default()
    }
}
