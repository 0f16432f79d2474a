use super::{check_edge, fill_from_maze, GraphError, WeightedGraph};
use crate::{cell::Cell, maze::Maze};

/// Dense backend: one `(rows · cols)²` weight matrix, 0 meaning no edge.
/// `neighbors` scans a full matrix row, which makes this the naive baseline;
/// it exists to cross-check the list backend, not to be fast.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    rows: usize,
    cols: usize,
    matrix: Vec<u32>,
    edges: usize,
}

impl AdjacencyMatrixGraph {
    pub fn new(rows: usize, cols: usize) -> Self {
        let n = rows * cols;
        Self {
            rows,
            cols,
            matrix: vec![0; n * n],
            edges: 0,
        }
    }

    pub fn from_maze(maze: &Maze) -> Result<Self, GraphError> {
        let mut graph = Self::new(maze.rows(), maze.cols());
        fill_from_maze(&mut graph, maze)?;
        Ok(graph)
    }

    fn index(&self, cell: Cell) -> usize {
        cell.0 as usize * self.cols + cell.1 as usize
    }

    fn cell_at(&self, index: usize) -> Cell {
        Cell((index / self.cols) as i32, (index % self.cols) as i32)
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        0 <= cell.0 && cell.0 < self.rows as i32 && 0 <= cell.1 && cell.1 < self.cols as i32
    }
}

impl WeightedGraph for AdjacencyMatrixGraph {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn add_edge(&mut self, u: Cell, v: Cell, weight: u32) -> Result<(), GraphError> {
        check_edge(self.rows, self.cols, u, v, weight)?;

        let n = self.vertex_count();
        let (i, j) = (self.index(u), self.index(v));
        match self.matrix[i * n + j] {
            0 => {
                self.matrix[i * n + j] = weight;
                self.matrix[j * n + i] = weight;
                self.edges += 1;
                Ok(())
            }
            w if w == weight => Ok(()),
            _ => Err(GraphError::InvalidEdge(u, v)),
        }
    }

    fn neighbors(&self, v: Cell) -> Box<dyn Iterator<Item = (Cell, u32)> + '_> {
        if !self.in_bounds(v) {
            return Box::new(std::iter::empty());
        }

        let n = self.vertex_count();
        let base = self.index(v) * n;
        Box::new((0..n).filter_map(move |j| {
            let w = self.matrix[base + j];
            (w > 0).then(|| (self.cell_at(j), w))
        }))
    }

    fn weight(&self, u: Cell, v: Cell) -> Option<u32> {
        if !self.in_bounds(u) || !self.in_bounds(v) {
            return None;
        }

        let w = self.matrix[self.index(u) * self.vertex_count() + self.index(v)];
        (w > 0).then_some(w)
    }

    fn vertex_count(&self) -> usize {
        self.rows * self.cols
    }

    fn edge_count(&self) -> usize {
        self.edges
    }
}
