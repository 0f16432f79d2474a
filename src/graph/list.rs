use smallvec::SmallVec;

use super::{check_edge, fill_from_maze, GraphError, WeightedGraph};
use crate::{cell::Cell, maze::Maze};

/// Sparse backend: one sorted neighbor list per vertex. Grid cells have at
/// most four neighbors, so the lists live inline in a `SmallVec`.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph {
    rows: usize,
    cols: usize,
    adjacency: Vec<SmallVec<[(Cell, u32); 4]>>,
    edges: usize,
}

impl AdjacencyListGraph {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            adjacency: vec![SmallVec::new(); rows * cols],
            edges: 0,
        }
    }

    pub fn from_maze(maze: &Maze) -> Result<Self, GraphError> {
        let mut graph = Self::new(maze.rows(), maze.cols());
        fill_from_maze(&mut graph, maze)?;
        Ok(graph)
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if 0 <= cell.0 && cell.0 < self.rows as i32 && 0 <= cell.1 && cell.1 < self.cols as i32 {
            Some(cell.0 as usize * self.cols + cell.1 as usize)
        } else {
            None
        }
    }

    /// Inserts into one endpoint's list, keeping it sorted by neighbor cell.
    /// `Err` means an edge with a different weight is already there.
    fn insert_half(&mut self, from: usize, to: Cell, weight: u32) -> Result<bool, ()> {
        let list = &mut self.adjacency[from];
        match list.binary_search_by_key(&to, |&(cell, _)| cell) {
            Ok(pos) if list[pos].1 == weight => Ok(false),
            Ok(_) => Err(()),
            Err(pos) => {
                list.insert(pos, (to, weight));
                Ok(true)
            }
        }
    }
}

impl WeightedGraph for AdjacencyListGraph {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn add_edge(&mut self, u: Cell, v: Cell, weight: u32) -> Result<(), GraphError> {
        check_edge(self.rows, self.cols, u, v, weight)?;

        let (i, j) = (self.index(u).unwrap(), self.index(v).unwrap());
        let inserted = self
            .insert_half(i, v, weight)
            .map_err(|()| GraphError::InvalidEdge(u, v))?;
        if inserted {
            self.insert_half(j, u, weight)
                .expect("adjacency lists out of sync");
            self.edges += 1;
        }
        Ok(())
    }

    fn neighbors(&self, v: Cell) -> Box<dyn Iterator<Item = (Cell, u32)> + '_> {
        match self.index(v) {
            Some(i) => Box::new(self.adjacency[i].iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn weight(&self, u: Cell, v: Cell) -> Option<u32> {
        let i = self.index(u)?;
        self.index(v)?;
        let list = &self.adjacency[i];
        list.binary_search_by_key(&v, |&(cell, _)| cell)
            .ok()
            .map(|pos| list[pos].1)
    }

    fn vertex_count(&self) -> usize {
        self.rows * self.cols
    }

    fn edge_count(&self) -> usize {
        self.edges
    }
}
