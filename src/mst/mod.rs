mod kruskals;
mod prims;

pub use kruskals::kruskals_mst;
pub use prims::prims_mst;

use hashbrown::HashMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{cell::Cell, graph::WeightedGraph};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstError {
    /// The input graph does not reach every vertex. Never expected for a
    /// graph built from a well-formed maze; fatal when it happens.
    #[error("graph is disconnected, {missing} vertices not spanned")]
    DisconnectedGraph { missing: usize },
}

/// Which MST algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstKind {
    Prims,
    Kruskals,
}

impl MstKind {
    pub fn build(self, graph: &dyn WeightedGraph, root: Cell) -> Result<SpanningTree, MstError> {
        match self {
            MstKind::Prims => prims_mst(graph, root),
            MstKind::Kruskals => kruskals_mst(graph, root),
        }
    }
}

/// A spanning tree of a grid graph: |V|−1 edges, connected, acyclic. Owns
/// its edge list and adjacency outright; dropping the source graph is fine.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    root: Cell,
    rows: usize,
    cols: usize,
    edges: Vec<(Cell, Cell, u32)>,
    adjacency: HashMap<Cell, SmallVec<[(Cell, u32); 4]>>,
    total_weight: u64,
}

impl SpanningTree {
    pub(crate) fn from_edges(
        root: Cell,
        rows: usize,
        cols: usize,
        edges: Vec<(Cell, Cell, u32)>,
    ) -> Self {
        let mut adjacency: HashMap<Cell, SmallVec<[(Cell, u32); 4]>> = HashMap::new();
        let mut total_weight = 0u64;

        for &(u, v, w) in &edges {
            adjacency.entry(u).or_default().push((v, w));
            adjacency.entry(v).or_default().push((u, w));
            total_weight += w as u64;
        }
        for list in adjacency.values_mut() {
            list.sort_unstable_by_key(|&(cell, _)| cell);
        }

        Self {
            root,
            rows,
            cols,
            edges,
            adjacency,
            total_weight,
        }
    }

    pub fn root(&self) -> Cell {
        self.root
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn vertex_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Tree edges as `(u, v, w)` with `u < v`.
    pub fn edges(&self) -> &[(Cell, Cell, u32)] {
        &self.edges
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Tree neighbors of a vertex, sorted by cell.
    pub fn neighbors(&self, v: Cell) -> &[(Cell, u32)] {
        self.adjacency.get(&v).map(|list| &list[..]).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::{kruskals_mst, prims_mst, Cell, MstError, MstKind, WeightedGraph};
    use crate::{
        generate::{generate_dfs, CarveSettings},
        graph::{AdjacencyListGraph, AdjacencyMatrixGraph, GraphKind},
    };

    fn braided(seed: u64) -> crate::maze::Maze {
        generate_dfs(
            7,
            9,
            Cell(3, 4),
            CarveSettings {
                wall_removal_perc: 40,
                max_weight: 10,
            },
            Some(seed),
        )
    }

    /// Union-find acyclicity/connectivity check over the tree edges.
    fn assert_is_spanning_tree(tree: &super::SpanningTree) {
        let n = tree.vertex_count();
        assert_eq!(tree.edges().len(), n.saturating_sub(1));

        let idx = |c: Cell| c.0 as usize * tree.cols() + c.1 as usize;
        let mut parent: Vec<usize> = (0..n).collect();
        fn find(parent: &mut Vec<usize>, mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }
        for &(u, v, _) in tree.edges() {
            let (ru, rv) = (find(&mut parent, idx(u)), find(&mut parent, idx(v)));
            assert_ne!(ru, rv, "cycle through {:?} -- {:?}", u, v);
            parent[ru] = rv;
        }
        let root = find(&mut parent, 0);
        assert!((0..n).all(|x| find(&mut parent, x) == root));
    }

    #[test]
    fn both_algorithms_agree_on_total_weight() {
        for seed in [1, 2, 3, 4, 5] {
            let maze = braided(seed);
            let graph = GraphKind::List.build(&maze).unwrap();

            let prims = prims_mst(graph.as_ref(), maze.entrance()).unwrap();
            let kruskals = kruskals_mst(graph.as_ref(), maze.entrance()).unwrap();

            assert_is_spanning_tree(&prims);
            assert_is_spanning_tree(&kruskals);
            assert_eq!(prims.total_weight(), kruskals.total_weight());
            assert!(prims.total_weight() <= graph.edges().iter().map(|e| e.2 as u64).sum());
        }
    }

    #[test]
    fn backend_choice_does_not_change_the_tree() {
        let maze = braided(9);
        let matrix = AdjacencyMatrixGraph::from_maze(&maze).unwrap();
        let list = AdjacencyListGraph::from_maze(&maze).unwrap();

        for kind in [MstKind::Prims, MstKind::Kruskals] {
            let a = kind.build(&matrix, maze.entrance()).unwrap();
            let b = kind.build(&list, maze.entrance()).unwrap();
            assert_eq!(a.edges(), b.edges());
        }
    }

    #[test]
    fn prims_is_rooted_at_the_entrance() {
        let maze = braided(12);
        let graph = GraphKind::List.build(&maze).unwrap();
        let tree = prims_mst(graph.as_ref(), maze.entrance()).unwrap();
        assert_eq!(tree.root(), maze.entrance());
        assert!(!tree.neighbors(maze.entrance()).is_empty());
    }

    #[test]
    fn disconnected_graph_is_an_error() {
        // 2×2 grid with a single edge: three vertices stay unreached.
        let mut graph = AdjacencyListGraph::new(2, 2);
        graph.add_edge(Cell(0, 0), Cell(0, 1), 1).unwrap();

        assert_eq!(
            prims_mst(&graph, Cell(0, 0)).unwrap_err(),
            MstError::DisconnectedGraph { missing: 2 }
        );
        assert_eq!(
            kruskals_mst(&graph, Cell(0, 0)).unwrap_err(),
            MstError::DisconnectedGraph { missing: 2 }
        );
    }

    #[test]
    fn single_vertex_tree_is_empty() {
        let maze = crate::maze::Maze::new(1, 1, Cell::ZERO);
        let graph = GraphKind::Matrix.build(&maze).unwrap();
        let tree = MstKind::Prims.build(graph.as_ref(), Cell::ZERO).unwrap();
        assert_eq!(tree.edges().len(), 0);
        assert_eq!(tree.total_weight(), 0);
    }
}
