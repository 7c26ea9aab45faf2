pub mod adjacency;
pub mod board;
pub mod error;
pub mod letter_set;
pub mod search;
pub mod solver;
pub mod util;
pub mod vocab;

pub use self::adjacency::{AdjacencyGraph, Cell};
pub use self::board::LetterGrid;
pub use self::error::GridError;
pub use self::search::PathSearcher;
pub use self::solver::{solve, SolveOptions, Solver};
pub use self::util::{Direction, Position};
