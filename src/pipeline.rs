use thiserror::Error;

use crate::{
    cell::Cell,
    graph::{GraphError, GraphKind},
    maze::Maze,
    mst::{MstError, MstKind, SpanningTree},
    solve::{
        validate_clone_origins, validate_coverage, validate_path_connectivity, CoverageReport,
        Plan, PolicyKind,
    },
};

/// The enumerated options the caller picks a run with. Selection only: the
/// contracts of the staged components are identical whatever is chosen here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    pub graph: GraphKind,
    pub mst: MstKind,
    pub policy: PolicyKind,
    pub clone_cost: u32,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            graph: GraphKind::List,
            mst: MstKind::Prims,
            policy: PolicyKind::NoClone,
            clone_cost: 1,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("entrance {0:?} is outside the maze bounds")]
    InvalidEntrance(Cell),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Mst(#[from] MstError),
}

/// Everything a run produces, handed to the caller read-only.
#[derive(Debug, Clone)]
pub struct Solution {
    pub tree: SpanningTree,
    pub plan: Plan,
    pub coverage: CoverageReport,
}

/// Runs the full maze → graph → spanning tree → plan → coverage pipeline.
pub fn solve_maze(maze: &Maze, options: &PlanOptions) -> Result<Solution, SolveError> {
    let entrance = maze.entrance();
    if !maze.is_in_bounds(entrance) {
        return Err(SolveError::InvalidEntrance(entrance));
    }

    let graph = options.graph.build(maze)?;
    log::debug!(
        "built {:?} graph: {} vertices, {} edges",
        options.graph,
        graph.vertex_count(),
        graph.edge_count(),
    );

    let tree = options.mst.build(graph.as_ref(), entrance)?;
    log::debug!(
        "{:?} spanning tree: {} edges, total weight {}",
        options.mst,
        tree.edges().len(),
        tree.total_weight(),
    );

    let plan = options.policy.plan(&tree, options.clone_cost);
    log::debug!(
        "{:?} plan: {} agents, {} clones, total cost {}",
        options.policy,
        plan.agents.len(),
        plan.clone_count(),
        plan.total_cost(),
    );

    let coverage = validate_coverage(&plan, maze.rows(), maze.cols());
    if !coverage.is_complete() {
        log::warn!("plan misses {} cells", coverage.missing().len());
    }
    let stray_spawns = validate_clone_origins(&plan);
    if !stray_spawns.is_empty() {
        log::warn!(
            "{} clone events disagree with their parents' paths",
            stray_spawns.len(),
        );
    }
    let broken_steps = validate_path_connectivity(&plan, &tree);
    if !broken_steps.is_empty() {
        log::warn!("{} plan steps leave the spanning tree", broken_steps.len());
    }

    Ok(Solution {
        tree,
        plan,
        coverage,
    })
}
