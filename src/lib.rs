pub mod array;
pub mod cell;
pub mod generate;
pub mod graph;
pub mod maze;
pub mod mst;
pub mod pipeline;
pub mod solve;

pub use cell::{Cell, Way};
pub use maze::Maze;
pub use pipeline::{solve_maze, PlanOptions, Solution, SolveError};
