use thiserror::Error;

/// Errors raised while building a letter grid. Either the whole grid is usable or none of it is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid length should be {width} (width) * {height} (height) = {expected} and not {actual}")]
    ShapeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("grid string contains invalid characters: {}", join_chars(.invalid))]
    InvalidCharacter {
        /// Offending characters, each listed once in order of first appearance
        invalid: Vec<char>,
    },

    #[error("grid must have at least one cell, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid shape {width}x{height} has more cells than can be counted")]
    ShapeOverflow { width: usize, height: usize },
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
