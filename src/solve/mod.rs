mod adaptive;
mod always_clone;
mod no_clone;
mod validate;

pub use adaptive::adaptive_plan;
pub use always_clone::always_clone_plan;
pub use no_clone::no_clone_plan;
pub use validate::{
    validate_clone_origins, validate_coverage, validate_path_connectivity, CoverageReport,
};

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::{cell::Cell, mst::SpanningTree};

pub type AgentId = usize;

/// One clone spawn: who, from whom, where, and at which step of the parent's
/// path. Enough to reconstruct the cost attribution of the whole plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloneEvent {
    pub clone: AgentId,
    pub parent: AgentId,
    pub spawn_cell: Cell,
    pub spawn_step: usize,
}

/// The walk of a single agent. `steps` starts at the agent's spawn cell and
/// records the agent's cumulative cost after every move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentPath {
    pub id: AgentId,
    /// Cost carried before the first own move: the parent's cumulative cost
    /// at the spawn point plus the clone fee. Zero for the original agent.
    pub base_cost: u64,
    pub steps: Vec<(Cell, u64)>,
}

impl AgentPath {
    fn start(id: AgentId, at: Cell, base_cost: u64) -> Self {
        Self {
            id,
            base_cost,
            steps: vec![(at, base_cost)],
        }
    }

    fn walk(&mut self, to: Cell, weight: u32) {
        let cost = self.total_cost() + weight as u64;
        self.steps.push((to, cost));
    }

    pub fn last_cell(&self) -> Cell {
        self.steps.last().expect("agent path never empty").0
    }

    pub fn total_cost(&self) -> u64 {
        self.steps.last().map_or(self.base_cost, |&(_, c)| c)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.steps.iter().map(|&(cell, _)| cell)
    }
}

/// A full traversal plan: every agent's walk plus the spawn events. The total
/// cost is makespan-style, the maximum over agents, because clones act in
/// parallel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub agents: Vec<AgentPath>,
    pub clones: Vec<CloneEvent>,
}

impl Plan {
    pub fn total_cost(&self) -> u64 {
        self.agents
            .iter()
            .map(AgentPath::total_cost)
            .max()
            .unwrap_or(0)
    }

    pub fn clone_count(&self) -> usize {
        self.clones.len()
    }
}

/// Which traversal policy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    NoClone,
    AlwaysClone,
    Adaptive,
}

impl PolicyKind {
    pub fn plan(self, tree: &SpanningTree, clone_cost: u32) -> Plan {
        match self {
            PolicyKind::NoClone => no_clone_plan(tree),
            PolicyKind::AlwaysClone => always_clone_plan(tree, clone_cost),
            PolicyKind::Adaptive => adaptive_plan(tree, clone_cost),
        }
    }
}

/// An unvisited branch out of a junction: the first cell behind the entry
/// edge, the entry edge weight, and the total edge weight of the unvisited
/// subtree behind it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Branch {
    pub cell: Cell,
    pub entry: u32,
    pub weight: u64,
}

impl Branch {
    /// Total work sitting behind this branch, entry edge included.
    pub fn load(&self) -> u64 {
        self.entry as u64 + self.weight
    }
}

/// Total edge weight of the unvisited subtree reachable from `start` without
/// crossing a visited cell.
pub(crate) fn subtree_weight(tree: &SpanningTree, start: Cell, visited: &HashSet<Cell>) -> u64 {
    let mut total = 0u64;
    let mut local = HashSet::new();
    let mut stack = vec![start];
    local.insert(start);

    while let Some(node) = stack.pop() {
        for &(next, w) in tree.neighbors(node) {
            if !visited.contains(&next) && local.insert(next) {
                total += w as u64;
                stack.push(next);
            }
        }
    }

    total
}

/// Unvisited branches out of `at`, sorted by ascending load, ties by cell.
/// Every policy orders its children this way, so plans are deterministic and
/// the heaviest branch always comes last.
pub(crate) fn unvisited_branches(
    tree: &SpanningTree,
    at: Cell,
    visited: &HashSet<Cell>,
) -> SmallVec<[Branch; 4]> {
    let mut branches: SmallVec<[Branch; 4]> = tree
        .neighbors(at)
        .iter()
        .filter(|(cell, _)| !visited.contains(cell))
        .map(|&(cell, entry)| Branch {
            cell,
            entry,
            weight: subtree_weight(tree, cell, visited),
        })
        .collect();

    branches.sort_unstable_by_key(|b| (b.load(), b.cell));
    branches
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::{
        cell::Cell,
        graph::GraphKind,
        maze::Maze,
        mst::{MstKind, SpanningTree},
    };

    /// Spanning tree of a hand-built maze, rooted at its entrance.
    pub fn tree_of(maze: &Maze) -> SpanningTree {
        let graph = GraphKind::List.build(maze).unwrap();
        MstKind::Prims.build(graph.as_ref(), maze.entrance()).unwrap()
    }

    /// 1×3 corridor with unit weights.
    pub fn corridor(entrance: Cell) -> Maze {
        let mut maze = Maze::new(1, 3, entrance);
        maze.open_passage(Cell(0, 0), Cell(0, 1), 1);
        maze.open_passage(Cell(0, 1), Cell(0, 2), 1);
        maze
    }
}
