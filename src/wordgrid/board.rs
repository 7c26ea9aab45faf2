use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

use super::error::GridError;
use super::letter_set::LetterSet;
use super::util::Position;

/// Immutable rectangle of lowercase letters. Indexed as `[y, x]` internally so rows are
/// contiguous and iteration is row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    letters: Array2<u8>,
    /// Every letter that appears somewhere in the grid
    alphabet: LetterSet,
}

impl LetterGrid {
    /// Validates `grid` against the declared shape and lays it out row by row.
    /// The shape is checked before the characters.
    pub fn build(grid: &str, width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }

        let expected = width
            .checked_mul(height)
            .ok_or(GridError::ShapeOverflow { width, height })?;
        let actual = grid.chars().count();
        if expected != actual {
            return Err(GridError::ShapeMismatch {
                width,
                height,
                expected,
                actual,
            });
        }

        let mut invalid = Vec::new();
        for c in grid.chars() {
            if !LetterSet::is_letter(c) && !invalid.contains(&c) {
                invalid.push(c);
            }
        }
        if !invalid.is_empty() {
            return Err(GridError::InvalidCharacter { invalid });
        }

        // Every char is ASCII at this point so bytes and chars line up
        let letters = Array2::from_shape_vec((height, width), grid.as_bytes().to_vec())
            .map_err(|_| GridError::ShapeMismatch {
                width,
                height,
                expected,
                actual,
            })?;
        Ok(Self::from_letters(letters))
    }

    /// Grid of uniformly drawn letters, mostly useful for demos and benchmarks
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(GridError::ShapeOverflow { width, height })?;
        let letters =
            Array2::random_using((height, width), Uniform::new_inclusive(b'a', b'z'), rng);
        Ok(Self::from_letters(letters))
    }

    fn from_letters(letters: Array2<u8>) -> Self {
        let alphabet = letters.iter().copied().collect();
        Self { letters, alphabet }
    }

    pub fn width(&self) -> usize {
        self.letters.ncols()
    }

    pub fn height(&self) -> usize {
        self.letters.nrows()
    }

    pub fn cell_count(&self) -> usize {
        self.letters.len()
    }

    pub fn alphabet(&self) -> LetterSet {
        self.alphabet
    }

    /// Letter at `pos`, or None outside the grid
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.letters.get((pos.y, pos.x)).copied()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.letters
            .indexed_iter()
            .map(|((y, x), _)| Position::new(x, y))
    }

    /// The grid flattened back into its row-major string form
    pub fn as_flat_string(&self) -> String {
        self.letters.iter().map(|&b| b as char).collect()
    }
}

impl std::ops::Index<Position> for LetterGrid {
    type Output = u8;

    fn index(&self, index: Position) -> &Self::Output {
        &self.letters[(index.y, index.x)]
    }
}

impl std::fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .letters
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&b| b as char).collect::<String>())
            .collect::<Vec<_>>();
        write!(f, "{}", rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_build_layout() {
        let grid = LetterGrid::build("brpgejkke", 3, 3).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell_count(), 9);
        assert_eq!(grid[Position::new(0, 0)], b'b');
        assert_eq!(grid[Position::new(2, 0)], b'p');
        assert_eq!(grid[Position::new(1, 1)], b'e');
        assert_eq!(grid[Position::new(0, 2)], b'k');
        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.to_string(), "brp\ngej\nkke");
        assert_eq!(grid.as_flat_string(), "brpgejkke");
    }

    #[test]
    fn test_non_square_layout() {
        let grid = LetterGrid::build("abcdef", 3, 2).unwrap();
        assert_eq!(grid.to_string(), "abc\ndef");
        assert_eq!(grid[Position::new(2, 1)], b'f');

        let positions = grid.positions().collect::<Vec<_>>();
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(1, 0));
        assert_eq!(positions[3], Position::new(0, 1));
        assert_eq!(positions.len(), 6);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = LetterGrid::build("abcde", 2, 2).unwrap_err();
        assert_eq!(
            err,
            GridError::ShapeMismatch {
                width: 2,
                height: 2,
                expected: 4,
                actual: 5
            }
        );

        // Counted in characters, not bytes
        let err = LetterGrid::build("ab\u{e9}", 2, 2).unwrap_err();
        assert!(matches!(
            err,
            GridError::ShapeMismatch {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_shape_overflow() {
        let err = LetterGrid::build("ab", usize::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            GridError::ShapeOverflow {
                width: usize::MAX,
                height: 2
            }
        );
        // A product that fits is still an ordinary mismatch
        assert!(matches!(
            LetterGrid::build("ab", usize::MAX, 1).unwrap_err(),
            GridError::ShapeMismatch {
                expected: usize::MAX,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_shape_checked_before_characters() {
        let err = LetterGrid::build("AB", 3, 3).unwrap_err();
        assert!(matches!(err, GridError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_invalid_characters_listed_once() {
        let err = LetterGrid::build("aB1bB1 \u{e9}", 4, 2).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCharacter {
                invalid: vec!['B', '1', ' ', '\u{e9}']
            }
        );
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(
            LetterGrid::build("", 0, 3).unwrap_err(),
            GridError::EmptyGrid {
                width: 0,
                height: 3
            }
        );
    }

    #[test]
    fn test_alphabet() {
        let grid = LetterGrid::build("abca", 2, 2).unwrap();
        let letters = grid.alphabet().iter().collect::<String>();
        assert_eq!(letters, "abc");
    }

    #[test]
    fn test_random_grid_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = LetterGrid::random(4, 5, &mut rng).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 5);

        let rebuilt = LetterGrid::build(&grid.as_flat_string(), 4, 5).unwrap();
        assert_eq!(rebuilt, grid);

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(LetterGrid::random(4, 5, &mut rng).unwrap(), grid);
    }

    #[test]
    fn test_random_grid_rejects_zero_sides() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            LetterGrid::random(0, 5, &mut rng).unwrap_err(),
            GridError::EmptyGrid {
                width: 0,
                height: 5
            }
        );
        assert!(matches!(
            LetterGrid::random(3, 0, &mut rng),
            Err(GridError::EmptyGrid { .. })
        ));
    }
}
