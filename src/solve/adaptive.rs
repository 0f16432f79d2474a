use hashbrown::HashSet;
use smallvec::SmallVec;

use super::{no_clone_plan, unvisited_branches, AgentPath, CloneEvent, Plan};
use crate::{cell::Cell, mst::SpanningTree};

/// Cost-aware cloning. At each junction the heaviest branch is kept for the
/// continuing agent; each lighter side branch is handed to a clone only when
/// the fee undercuts the serial round trip `2 · (entry + subtree weight)`,
/// and is otherwise walked and backtracked in place. A fee exactly equal to
/// the round trip stays serial, consistently for the whole run.
///
/// The returned plan never costs more than the plain no-clone walk: when the
/// heuristic fails to beat it, the walk itself is returned.
pub fn adaptive_plan(tree: &SpanningTree, clone_cost: u32) -> Plan {
    let heuristic = heuristic_plan(tree, clone_cost);
    let walk = no_clone_plan(tree);

    if heuristic.total_cost() < walk.total_cost() {
        heuristic
    } else {
        if heuristic.total_cost() > walk.total_cost() {
            log::debug!(
                "cloning heuristic ({}) lost to the plain walk ({}), keeping the walk",
                heuristic.total_cost(),
                walk.total_cost(),
            );
        }
        walk
    }
}

fn heuristic_plan(tree: &SpanningTree, clone_cost: u32) -> Plan {
    let root = tree.root();
    let fee = clone_cost as u64;

    let mut visited = HashSet::with_capacity(tree.vertex_count());
    visited.insert(root);

    let mut agents = vec![AgentPath::start(0, root, 0)];
    let mut clones: Vec<CloneEvent> = Vec::new();

    let mut work: Vec<(usize, Option<(Cell, u32)>)> = vec![(0, None)];
    while let Some((id, forced)) = work.pop() {
        if let Some((cell, entry)) = forced {
            agents[id].walk(cell, entry);
        }

        // Steps length right after the most recent first visit; trailing
        // backtracks beyond it are pure waste and get trimmed at the end.
        let mut last_new = agents[id].steps.len();

        let mut frames = vec![(agents[id].last_cell(), 0u32)];
        while let Some(&(at, back)) = frames.last() {
            let mut branches = unvisited_branches(tree, at, &visited);

            if branches.len() > 1 {
                let junction_cost = agents[id].total_cost();
                let spawn_step = agents[id].steps.len() - 1;
                let mut spawned: SmallVec<[Cell; 4]> = SmallVec::new();

                // The heaviest branch is the agent's own continuation and is
                // never cloned away.
                for branch in &branches[..branches.len() - 1] {
                    if fee < 2 * branch.load() {
                        visited.insert(branch.cell);
                        let clone_id = agents.len();
                        agents.push(AgentPath::start(clone_id, at, junction_cost + fee));
                        clones.push(CloneEvent {
                            clone: clone_id,
                            parent: id,
                            spawn_cell: at,
                            spawn_step,
                        });
                        work.push((clone_id, Some((branch.cell, branch.entry))));
                        spawned.push(branch.cell);
                    }
                }
                branches.retain(|b| !spawned.contains(&b.cell));
            }

            match branches.first() {
                Some(branch) => {
                    visited.insert(branch.cell);
                    agents[id].walk(branch.cell, branch.entry);
                    last_new = agents[id].steps.len();
                    frames.push((branch.cell, branch.entry));
                }
                None => {
                    frames.pop();
                    if let Some(&(parent, _)) = frames.last() {
                        agents[id].walk(parent, back);
                    }
                }
            }
        }

        agents[id].steps.truncate(last_new);
    }

    Plan { agents, clones }
}
