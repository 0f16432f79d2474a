use hashbrown::HashSet;

use super::{unvisited_branches, AgentPath, Plan};
use crate::mst::SpanningTree;

/// Single-agent depth-first walk of the spanning tree, backtracking over
/// already-traversed edges when a branch is exhausted. Lightest branch first,
/// so the heaviest subtree is taken last and its final descent is never
/// backtracked; the walk stops as soon as every vertex has been seen.
pub fn no_clone_plan(tree: &SpanningTree) -> Plan {
    let root = tree.root();
    let total = tree.vertex_count();

    let mut visited = HashSet::with_capacity(total);
    visited.insert(root);
    let mut agent = AgentPath::start(0, root, 0);

    // Frame stack instead of recursion: (cell, weight of the edge back up).
    let mut frames = vec![(root, 0u32)];
    while let Some(&(at, back)) = frames.last() {
        if visited.len() == total {
            break;
        }

        let branches = unvisited_branches(tree, at, &visited);
        match branches.first() {
            Some(branch) => {
                visited.insert(branch.cell);
                agent.walk(branch.cell, branch.entry);
                frames.push((branch.cell, branch.entry));
            }
            None => {
                frames.pop();
                if let Some(&(parent, _)) = frames.last() {
                    agent.walk(parent, back);
                }
            }
        }
    }

    Plan {
        agents: vec![agent],
        clones: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::no_clone_plan;
    use crate::{
        cell::Cell,
        maze::Maze,
        solve::test_util::{corridor, tree_of},
        solve::validate_coverage,
    };

    #[test]
    fn corridor_from_the_end_never_backtracks() {
        let tree = tree_of(&corridor(Cell(0, 0)));
        let plan = no_clone_plan(&tree);
        assert_eq!(plan.total_cost(), 2);
        assert_eq!(plan.clone_count(), 0);
        assert_eq!(
            plan.agents[0].cells().collect::<Vec<_>>(),
            vec![Cell(0, 0), Cell(0, 1), Cell(0, 2)]
        );
    }

    #[test]
    fn corridor_from_the_middle_backtracks_once() {
        let tree = tree_of(&corridor(Cell(0, 1)));
        let plan = no_clone_plan(&tree);
        assert_eq!(plan.total_cost(), 3);
        assert_eq!(
            plan.agents[0].cells().collect::<Vec<_>>(),
            vec![Cell(0, 1), Cell(0, 0), Cell(0, 1), Cell(0, 2)]
        );
    }

    #[test]
    fn weighted_path_cost_is_the_sum_of_weights() {
        // Zero branching: each edge is traversed exactly once.
        let mut maze = Maze::new(1, 4, Cell::ZERO);
        maze.open_passage(Cell(0, 0), Cell(0, 1), 2);
        maze.open_passage(Cell(0, 1), Cell(0, 2), 7);
        maze.open_passage(Cell(0, 2), Cell(0, 3), 4);

        let plan = no_clone_plan(&tree_of(&maze));
        assert_eq!(plan.total_cost(), 13);
    }

    #[test]
    fn single_cell_costs_nothing() {
        let tree = tree_of(&Maze::new(1, 1, Cell::ZERO));
        let plan = no_clone_plan(&tree);
        assert_eq!(plan.total_cost(), 0);
        assert_eq!(plan.agents[0].steps.len(), 1);
        assert!(validate_coverage(&plan, 1, 1).is_complete());
    }

    #[test]
    fn walk_cost_is_double_weight_minus_the_final_descent() {
        let maze = crate::generate::generate_dfs(
            6,
            6,
            Cell(0, 0),
            crate::generate::CarveSettings {
                wall_removal_perc: 0,
                max_weight: 5,
            },
            Some(21),
        );
        let tree = tree_of(&maze);
        let plan = no_clone_plan(&tree);

        // The walk traverses every tree edge twice except those on the path
        // to the last-visited vertex.
        assert!(plan.total_cost() < 2 * tree.total_weight());
        assert!(plan.total_cost() >= tree.total_weight());
        assert!(validate_coverage(&plan, 6, 6).is_complete());
    }
}
