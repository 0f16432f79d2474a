use hashbrown::HashSet;

use super::{AgentId, CloneEvent, Plan};
use crate::{cell::Cell, graph::grid_cells, mst::SpanningTree};

/// Cells of the grid that no agent in a plan ever stood on, in row-major
/// order. Empty means full coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    missing: Vec<Cell>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing(&self) -> &[Cell] {
        &self.missing
    }
}

/// Checks a plan against the full vertex set of an `rows × cols` grid. Pure;
/// works on a plan from any policy. A gap is reported as data rather than an
/// error so callers get the exact missed cells.
pub fn validate_coverage(plan: &Plan, rows: usize, cols: usize) -> CoverageReport {
    let seen: HashSet<Cell> = plan
        .agents
        .iter()
        .flat_map(|agent| agent.cells())
        .collect();

    CoverageReport {
        missing: grid_cells(rows, cols)
            .filter(|cell| !seen.contains(cell))
            .collect(),
    }
}

/// Spawn events whose bookkeeping disagrees with the recorded paths. A sound
/// event has the parent standing on the spawn cell at `spawn_step` and the
/// clone starting there. Empty means every clone has a valid origin.
pub fn validate_clone_origins(plan: &Plan) -> Vec<CloneEvent> {
    plan.clones
        .iter()
        .filter(|event| {
            let parent_there = plan
                .agents
                .get(event.parent)
                .and_then(|parent| parent.steps.get(event.spawn_step))
                .map_or(false, |&(cell, _)| cell == event.spawn_cell);
            let clone_starts_there = plan
                .agents
                .get(event.clone)
                .and_then(|clone| clone.steps.first())
                .map_or(false, |&(cell, _)| cell == event.spawn_cell);

            !(parent_there && clone_starts_there)
        })
        .copied()
        .collect()
}

/// Moves that do not follow a real edge of the walked tree. Every consecutive
/// step pair in every agent's path must be a tree edge, and the recorded
/// cumulative cost must grow by exactly its weight. Offenders are returned as
/// `(agent id, index of the arriving step)`.
pub fn validate_path_connectivity(plan: &Plan, tree: &SpanningTree) -> Vec<(AgentId, usize)> {
    let mut broken = Vec::new();

    for agent in &plan.agents {
        for (i, pair) in agent.steps.windows(2).enumerate() {
            let ((from, cost), (to, next_cost)) = (pair[0], pair[1]);
            let edge = tree
                .neighbors(from)
                .iter()
                .find(|&&(cell, _)| cell == to)
                .map(|&(_, w)| w);

            match edge {
                Some(w) if cost + w as u64 == next_cost => {}
                _ => broken.push((agent.id, i + 1)),
            }
        }
    }

    broken
}
