use hashbrown::HashSet;

use crate::{
    array::Array2D,
    cell::{Cell, Way},
};

/// A grid maze: rows × cols cells, an entrance, and a weight for every pair
/// of adjacent cells. Weight 0 encodes a wall; a positive weight is the
/// symmetric traversal cost of the open passage.
///
/// Built once by a generator or loader, read-only afterwards. Everything
/// downstream (graphs, trees, plans) is derived by value and never aliases
/// this storage.
#[derive(Debug, Clone)]
pub struct Maze {
    rows: usize,
    cols: usize,
    entrance: Cell,
    /// Weights of passages between (r, c) and (r, c + 1), keyed by the left cell.
    horizontal: Array2D<u32>,
    /// Weights of passages between (r, c) and (r + 1, c), keyed by the upper cell.
    vertical: Array2D<u32>,
}

impl Maze {
    /// A maze with every passage closed.
    pub fn new(rows: usize, cols: usize, entrance: Cell) -> Self {
        assert!(rows > 0 && cols > 0, "maze must have at least one cell");

        Maze {
            rows,
            cols,
            entrance,
            horizontal: Array2D::new(0, rows, cols.saturating_sub(1)),
            vertical: Array2D::new(0, rows.saturating_sub(1), cols),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn entrance(&self) -> Cell {
        self.entrance
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_in_bounds(&self, pos: Cell) -> bool {
        0 <= pos.0 && pos.0 < self.rows as i32 && 0 <= pos.1 && pos.1 < self.cols as i32
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        (0..self.cell_count()).map(move |i| Cell((i / cols) as i32, (i % cols) as i32))
    }

    /// Which weight plane holds the passage between two cells, keyed by the
    /// lower of the two. `None` if the cells are not adjacent in-bounds cells.
    fn slot(&self, a: Cell, b: Cell) -> Option<(bool, Cell)> {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) || !a.is_adjacent(b) {
            return None;
        }

        let lo = a.min(b);
        Some((a.0 == b.0, lo))
    }

    /// Opens the passage between two adjacent cells with the given cost.
    /// Invalid pairs and a zero weight are ignored, like the out-of-bounds
    /// passages the generator probes at the maze border; weight 0 is the
    /// wall encoding and never a traversal cost.
    pub fn open_passage(&mut self, a: Cell, b: Cell, weight: u32) {
        if weight == 0 {
            return;
        }

        if let Some((horizontal, lo)) = self.slot(a, b) {
            if horizontal {
                self.horizontal[lo] = weight;
            } else {
                self.vertical[lo] = weight;
            }
        }
    }

    /// Traversal cost between two adjacent cells, or `None` when a wall (or
    /// the maze border) separates them.
    pub fn weight_between(&self, a: Cell, b: Cell) -> Option<u32> {
        let (horizontal, lo) = self.slot(a, b)?;
        let w = if horizontal {
            self.horizontal[lo]
        } else {
            self.vertical[lo]
        };

        (w > 0).then_some(w)
    }

    pub fn is_open(&self, a: Cell, b: Cell) -> bool {
        self.weight_between(a, b).is_some()
    }

    /// Open neighbors of a cell, in increasing cell order.
    pub fn open_neighbors(&self, pos: Cell) -> impl Iterator<Item = (Cell, u32)> + '_ {
        [Way::Top, Way::Left, Way::Right, Way::Bottom]
            .into_iter()
            .filter_map(move |way| {
                let other = pos + way.offset();
                self.weight_between(pos, other).map(|w| (other, w))
            })
    }

    /// Whether every cell is reachable from every other through open passages.
    pub fn is_connected(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.cell_count());
        let mut stack = vec![Cell::ZERO];
        seen.insert(Cell::ZERO);

        while let Some(pos) = stack.pop() {
            for (next, _) in self.open_neighbors(pos) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }

        seen.len() == self.cell_count()
    }
}
