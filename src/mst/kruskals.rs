use super::{MstError, SpanningTree};
use crate::{cell::Cell, graph::WeightedGraph};

/// Disjoint-set forest over vertex indices, with path halving and union by
/// rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

/// Kruskal's algorithm. Edges are processed by ascending weight, ties by
/// `(u, v)` cell order, so the accepted edge set is deterministic.
pub fn kruskals_mst(graph: &dyn WeightedGraph, root: Cell) -> Result<SpanningTree, MstError> {
    let n = graph.vertex_count();
    let cols = graph.cols();
    let index = |c: Cell| c.0 as usize * cols + c.1 as usize;

    let mut all = graph.edges();
    all.sort_unstable_by_key(|&(u, v, w)| (w, u, v));

    let mut sets = DisjointSet::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for (u, v, w) in all {
        if sets.union(index(u), index(v)) {
            edges.push((u, v, w));
            if edges.len() + 1 == n {
                break;
            }
        }
    }

    if edges.len() + 1 < n {
        return Err(MstError::DisconnectedGraph {
            missing: n - 1 - edges.len(),
        });
    }

    Ok(SpanningTree::from_edges(
        root,
        graph.rows(),
        graph.cols(),
        edges,
    ))
}

#[cfg(test)]
mod tests {
    use super::{kruskals_mst, Cell, DisjointSet};
    use crate::graph::{AdjacencyListGraph, WeightedGraph};

    #[test]
    fn union_find_detects_cycles() {
        let mut sets = DisjointSet::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(sets.union(1, 2));
        assert!(!sets.union(0, 3));
        assert_eq!(sets.find(0), sets.find(3));
    }

    #[test]
    fn skips_the_heaviest_cycle_edge() {
        let mut graph = AdjacencyListGraph::new(2, 2);
        graph.add_edge(Cell(0, 0), Cell(0, 1), 1).unwrap();
        graph.add_edge(Cell(0, 0), Cell(1, 0), 2).unwrap();
        graph.add_edge(Cell(0, 1), Cell(1, 1), 3).unwrap();
        graph.add_edge(Cell(1, 0), Cell(1, 1), 4).unwrap();

        let tree = kruskals_mst(&graph, Cell(0, 0)).unwrap();
        assert_eq!(tree.total_weight(), 6);
        assert!(!tree
            .edges()
            .iter()
            .any(|&(u, v, _)| u == Cell(1, 0) && v == Cell(1, 1)));
    }

    #[test]
    fn tie_break_is_lexicographic() {
        // All weights equal on the 2×2 cycle: the dropped edge is the
        // lexicographically last one.
        let mut graph = AdjacencyListGraph::new(2, 2);
        for (u, v) in [
            (Cell(0, 0), Cell(0, 1)),
            (Cell(0, 0), Cell(1, 0)),
            (Cell(0, 1), Cell(1, 1)),
            (Cell(1, 0), Cell(1, 1)),
        ] {
            graph.add_edge(u, v, 5).unwrap();
        }

        let tree = kruskals_mst(&graph, Cell(0, 0)).unwrap();
        assert_eq!(
            tree.edges(),
            &[
                (Cell(0, 0), Cell(0, 1), 5),
                (Cell(0, 0), Cell(1, 0), 5),
                (Cell(0, 1), Cell(1, 1), 5),
            ]
        );
    }
}
