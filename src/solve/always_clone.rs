use hashbrown::HashSet;

use super::{unvisited_branches, AgentPath, CloneEvent, Plan};
use crate::{cell::Cell, mst::SpanningTree};

/// Clone-at-every-junction walk of the spanning tree. Whenever an agent
/// stands at a vertex with several unvisited branches, every branch but the
/// heaviest gets a fresh clone; the agent itself continues into the heaviest.
/// Nobody ever backtracks.
pub fn always_clone_plan(tree: &SpanningTree, clone_cost: u32) -> Plan {
    let root = tree.root();

    let mut visited = HashSet::with_capacity(tree.vertex_count());
    visited.insert(root);

    let mut agents = vec![AgentPath::start(0, root, 0)];
    let mut clones: Vec<CloneEvent> = Vec::new();

    // Pending agents; clones carry the forced first move into their branch.
    let mut work: Vec<(usize, Option<(Cell, u32)>)> = vec![(0, None)];
    while let Some((id, forced)) = work.pop() {
        if let Some((cell, entry)) = forced {
            agents[id].walk(cell, entry);
        }

        let mut at = agents[id].last_cell();
        loop {
            let branches = unvisited_branches(tree, at, &visited);
            let Some((main, rest)) = branches.split_last() else {
                break;
            };

            let junction_cost = agents[id].total_cost();
            let spawn_step = agents[id].steps.len() - 1;
            for branch in rest {
                visited.insert(branch.cell);
                let clone_id = agents.len();
                agents.push(AgentPath::start(
                    clone_id,
                    at,
                    junction_cost + clone_cost as u64,
                ));
                clones.push(CloneEvent {
                    clone: clone_id,
                    parent: id,
                    spawn_cell: at,
                    spawn_step,
                });
                work.push((clone_id, Some((branch.cell, branch.entry))));
            }

            visited.insert(main.cell);
            agents[id].walk(main.cell, main.entry);
            at = main.cell;
        }
    }

    Plan { agents, clones }
}
