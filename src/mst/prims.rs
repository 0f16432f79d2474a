use std::{cmp::Reverse, collections::BinaryHeap};

use hashbrown::HashSet;

use super::{MstError, SpanningTree};
use crate::{cell::Cell, graph::WeightedGraph};

/// Prim's algorithm, grown from `root` (the maze entrance, so downstream
/// planners see the tree rooted where traversal starts).
///
/// The heap orders candidates by `(weight, vertex, parent)`: weight ties are
/// broken by the lower (row, col) of the vertex entering the tree.
pub fn prims_mst(graph: &dyn WeightedGraph, root: Cell) -> Result<SpanningTree, MstError> {
    let n = graph.vertex_count();
    let mut visited = HashSet::with_capacity(n);
    let mut heap = BinaryHeap::new();
    let mut edges = Vec::with_capacity(n.saturating_sub(1));

    visited.insert(root);
    for (v, w) in graph.neighbors(root) {
        heap.push(Reverse((w, v, root)));
    }

    while let Some(Reverse((w, v, u))) = heap.pop() {
        if !visited.insert(v) {
            continue;
        }

        edges.push(if u < v { (u, v, w) } else { (v, u, w) });
        for (next, nw) in graph.neighbors(v) {
            if !visited.contains(&next) {
                heap.push(Reverse((nw, next, v)));
            }
        }
    }

    if visited.len() < n {
        return Err(MstError::DisconnectedGraph {
            missing: n - visited.len(),
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
    use super::{prims_mst, Cell};
    use crate::graph::{AdjacencyListGraph, WeightedGraph};

    #[test]
    fn weight_ties_break_towards_the_lower_cell() {
        // Uniform weights on a 2×2 cycle: the rejected edge must be the one
        // closing the cycle at the lexicographically larger frontier.
        let mut graph = AdjacencyListGraph::new(2, 2);
        graph.add_edge(Cell(0, 0), Cell(0, 1), 2).unwrap();
        graph.add_edge(Cell(0, 0), Cell(1, 0), 2).unwrap();
        graph.add_edge(Cell(0, 1), Cell(1, 1), 2).unwrap();
        graph.add_edge(Cell(1, 0), Cell(1, 1), 2).unwrap();

        let tree = prims_mst(&graph, Cell(0, 0)).unwrap();
        assert_eq!(
            tree.edges(),
            &[
                (Cell(0, 0), Cell(0, 1), 2),
                (Cell(0, 0), Cell(1, 0), 2),
                (Cell(0, 1), Cell(1, 1), 2),
            ]
        );
    }

    #[test]
    fn picks_cheap_edges_over_the_cheap_tie_break() {
        // Path weights force the expensive edge out even though its endpoint
        // would win the tie-break.
        let mut graph = AdjacencyListGraph::new(1, 3);
        graph.add_edge(Cell(0, 0), Cell(0, 1), 9).unwrap();
        graph.add_edge(Cell(0, 1), Cell(0, 2), 1).unwrap();

        let tree = prims_mst(&graph, Cell(0, 0)).unwrap();
        assert_eq!(tree.total_weight(), 10);
    }
}
