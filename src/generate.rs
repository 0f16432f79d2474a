use hashbrown::HashSet;
use rand::{seq::SliceRandom, thread_rng, Rng, SeedableRng};
use smallvec::SmallVec;

use crate::{
    cell::{Cell, Way},
    maze::Maze,
};

/// Seedable RNG behind maze carving; the same seed reproduces the same maze.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Knobs for the DFS carver.
#[derive(Debug, Clone, Copy)]
pub struct CarveSettings {
    /// Percentage (0–100) of the walls left after carving that get knocked
    /// out afterwards, turning the perfect maze into a braided one.
    pub wall_removal_perc: u32,
    /// Passage costs are drawn uniformly from `1..=max_weight`.
    pub max_weight: u32,
}

impl Default for CarveSettings {
    fn default() -> Self {
        Self {
            wall_removal_perc: 0,
            max_weight: 1,
        }
    }
}

/// Carves a random maze over the full grid with a depth-first walk, then
/// removes a percentage of the remaining internal walls. The result is
/// connected by construction.
pub fn generate_dfs(
    rows: usize,
    cols: usize,
    entrance: Cell,
    settings: CarveSettings,
    seed: Option<u64>,
) -> Maze {
    assert!(settings.wall_removal_perc <= 100);
    assert!(settings.max_weight >= 1);

    let mut rng = Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()));
    let mut maze = Maze::new(rows, cols, entrance);

    let cell_count = maze.cell_count();
    let mut visited = HashSet::with_capacity(cell_count);
    let mut stack = Vec::with_capacity(cell_count);

    let start = if maze.is_in_bounds(entrance) {
        entrance
    } else {
        Cell::ZERO
    };
    visited.insert(start);
    stack.push(start);

    while let Some(&current) = stack.last() {
        let unvisited = Way::ALL
            .into_iter()
            .map(|way| current + way.offset())
            .filter(|cell| maze.is_in_bounds(*cell) && !visited.contains(cell))
            .collect::<SmallVec<[_; 4]>>();

        match unvisited.choose(&mut rng) {
            Some(&chosen) => {
                maze.open_passage(current, chosen, rng.gen_range(1..=settings.max_weight));
                visited.insert(chosen);
                stack.push(chosen);
            }
            None => {
                stack.pop();
            }
        }
    }

    if settings.wall_removal_perc > 0 {
        let mut walls: Vec<(Cell, Cell)> = Vec::new();
        for cell in maze.cells().collect::<Vec<_>>() {
            for way in [Way::Right, Way::Bottom] {
                let other = cell + way.offset();
                if maze.is_in_bounds(other) && !maze.is_open(cell, other) {
                    walls.push((cell, other));
                }
            }
        }

        walls.shuffle(&mut rng);
        let remove = walls.len() * settings.wall_removal_perc as usize / 100;
        for (a, b) in walls.into_iter().take(remove) {
            maze.open_passage(a, b, rng.gen_range(1..=settings.max_weight));
        }
    }

    maze
}
