mod list;
mod matrix;

pub use list::AdjacencyListGraph;
pub use matrix::AdjacencyMatrixGraph;

use thiserror::Error;

use crate::{
    cell::{Cell, Way},
    maze::Maze,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid edge {0:?} -- {1:?}")]
    InvalidEdge(Cell, Cell),
}

/// Simple undirected weighted graph over the cells of an `rows × cols` grid.
///
/// The two backends differ only in asymptotics. Everything downstream treats
/// them through this trait and must behave identically on either; in
/// particular `neighbors` yields increasing cell order on both, so traversal
/// tie-breaks never depend on the backend.
pub trait WeightedGraph {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Adds an undirected edge. Fails on a self-loop, a zero weight, an
    /// out-of-bounds endpoint, or an existing edge with a different weight;
    /// re-adding an edge with its current weight is a no-op.
    fn add_edge(&mut self, u: Cell, v: Cell, weight: u32) -> Result<(), GraphError>;

    /// Neighbors of `v` with edge weights, in increasing cell order. Lazy and
    /// restartable; empty for an out-of-bounds cell.
    fn neighbors(&self, v: Cell) -> Box<dyn Iterator<Item = (Cell, u32)> + '_>;

    /// Weight of the edge between `u` and `v`, or `None` if there is none.
    fn weight(&self, u: Cell, v: Cell) -> Option<u32>;

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Every undirected edge once, as `(u, v, w)` with `u < v`, in
    /// lexicographic order.
    fn edges(&self) -> Vec<(Cell, Cell, u32)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for u in grid_cells(self.rows(), self.cols()) {
            for (v, w) in self.neighbors(u) {
                if u < v {
                    out.push((u, v, w));
                }
            }
        }
        out
    }
}

/// All cells of a grid in row-major order.
pub fn grid_cells(rows: usize, cols: usize) -> impl Iterator<Item = Cell> {
    (0..rows * cols).map(move |i| Cell((i / cols) as i32, (i % cols) as i32))
}

/// Common `add_edge` validation shared by the backends.
pub(crate) fn check_edge(
    rows: usize,
    cols: usize,
    u: Cell,
    v: Cell,
    weight: u32,
) -> Result<(), GraphError> {
    let in_bounds =
        |c: Cell| 0 <= c.0 && c.0 < rows as i32 && 0 <= c.1 && c.1 < cols as i32;

    if u == v || weight == 0 || !in_bounds(u) || !in_bounds(v) {
        return Err(GraphError::InvalidEdge(u, v));
    }

    Ok(())
}

pub(crate) fn fill_from_maze<G: WeightedGraph>(graph: &mut G, maze: &Maze) -> Result<(), GraphError> {
    for cell in maze.cells() {
        for way in [Way::Right, Way::Bottom] {
            let next = cell + way.offset();
            if let Some(w) = maze.weight_between(cell, next) {
                graph.add_edge(cell, next, w)?;
            }
        }
    }
    Ok(())
}

/// Which graph backend to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Matrix,
    List,
}

impl GraphKind {
    pub fn build(self, maze: &Maze) -> Result<Box<dyn WeightedGraph>, GraphError> {
        Ok(match self {
            GraphKind::Matrix => Box::new(AdjacencyMatrixGraph::from_maze(maze)?),
            GraphKind::List => Box::new(AdjacencyListGraph::from_maze(maze)?),
        })
    }
}
