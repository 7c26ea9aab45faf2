//! Word-search solver: finds which words of a list can be traced through a letter grid by
//! stepping between adjacent cells, never visiting a cell twice in one word.
//!
//! ```
//! let found = gridwords::solve("brpgejkke", 3, 3, &["keg", "jerk"], true).unwrap();
//! assert_eq!(found, vec!["keg"]);
//! ```

pub mod utils;
pub mod wordgrid;

pub use wordgrid::{solve, GridError, LetterGrid, SolveOptions, Solver};
