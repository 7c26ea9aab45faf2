use std::slice::Iter;

use serde::Serialize;

/// One of the eight ways to step from a cell to an adjacent one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Left,
    Right,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Direction {
    /// Directions in search order: the orthogonal ones first, then (optionally) the diagonals
    pub fn iter(diagonals: bool) -> Iter<'static, Direction> {
        static DIRS: [Direction; 8] = [
            Direction::Top,
            Direction::Left,
            Direction::Right,
            Direction::Bottom,
            Direction::TopLeft,
            Direction::TopRight,
            Direction::BottomLeft,
            Direction::BottomRight,
        ];
        if diagonals {
            DIRS.iter()
        } else {
            DIRS[..4].iter()
        }
    }

    pub fn is_diagonal(&self) -> bool {
        !matches!(
            self,
            Self::Top | Self::Left | Self::Right | Self::Bottom
        )
    }

    /// Slot of this direction in a cell's neighbour array
    pub fn as_index(&self) -> usize {
        match self {
            Self::Top => 0,
            Self::Left => 1,
            Self::Right => 2,
            Self::Bottom => 3,
            Self::TopLeft => 4,
            Self::TopRight => 5,
            Self::BottomLeft => 6,
            Self::BottomRight => 7,
        }
    }

    /// The two orthogonal steps a diagonal is made of. Orthogonal directions return themselves.
    pub fn components(&self) -> (Direction, Direction) {
        match self {
            Self::TopLeft => (Self::Top, Self::Left),
            Self::TopRight => (Self::Top, Self::Right),
            Self::BottomLeft => (Self::Bottom, Self::Left),
            Self::BottomRight => (Self::Bottom, Self::Right),
            &d => (d, d),
        }
    }

    pub fn flip(&self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Single orthogonal step, None when it would leave a `width` x `height` grid
    fn step(&self, dir: Direction, width: usize, height: usize) -> Option<Position> {
        match dir {
            Direction::Top if self.y > 0 => Some(Position::new(self.x, self.y - 1)),
            Direction::Left if self.x > 0 => Some(Position::new(self.x - 1, self.y)),
            Direction::Right if self.x + 1 < width => Some(Position::new(self.x + 1, self.y)),
            Direction::Bottom if self.y + 1 < height => Some(Position::new(self.x, self.y + 1)),
            _ => None,
        }
    }

    /// Returns the adjacent position in the given direction. A diagonal only exists when
    /// both of its orthogonal components stay inside the grid.
    pub fn next(&self, dir: Direction, width: usize, height: usize) -> Option<Position> {
        let (first, second) = dir.components();
        let p = self.step(first, width, height)?;
        if dir.is_diagonal() {
            self.step(second, width, height)?;
            p.step(second, width, height)
        } else {
            Some(p)
        }
    }

    /// Returns all the valid adjacent positions to this position, in search order
    pub fn adjacent(&self, diagonals: bool, width: usize, height: usize) -> Vec<Position> {
        Direction::iter(diagonals)
            .filter_map(|d| self.next(*d, width, height))
            .collect()
    }

    /// Converts the x/y to a row-major 1d index
    pub fn as_index(&self, width: usize) -> usize {
        self.y * width + self.x
    }

    /// True when `other` is one step away (orthogonally, or diagonally if allowed)
    pub fn is_adjacent(&self, other: &Position, diagonals: bool) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        match (dx, dy) {
            (0, 1) | (1, 0) => true,
            (1, 1) => diagonals,
            _ => false,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}:{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_order() {
        let ortho = Direction::iter(false).copied().collect::<Vec<_>>();
        assert_eq!(
            ortho,
            vec![Direction::Top, Direction::Left, Direction::Right, Direction::Bottom]
        );

        let all = Direction::iter(true).copied().collect::<Vec<_>>();
        assert_eq!(all.len(), 8);
        assert_eq!(
            &all[4..],
            &[
                Direction::TopLeft,
                Direction::TopRight,
                Direction::BottomLeft,
                Direction::BottomRight
            ]
        );
        for (i, d) in all.iter().enumerate() {
            assert_eq!(d.as_index(), i);
            assert_eq!(d.flip().flip(), *d);
        }
    }

    #[test]
    fn test_next_respects_borders() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.next(Direction::Top, 3, 3), None);
        assert_eq!(corner.next(Direction::Left, 3, 3), None);
        assert_eq!(corner.next(Direction::TopLeft, 3, 3), None);
        assert_eq!(corner.next(Direction::TopRight, 3, 3), None);
        assert_eq!(corner.next(Direction::BottomLeft, 3, 3), None);
        assert_eq!(
            corner.next(Direction::BottomRight, 3, 3),
            Some(Position::new(1, 1))
        );

        let far = Position::new(2, 2);
        assert_eq!(far.next(Direction::Right, 3, 3), None);
        assert_eq!(far.next(Direction::Bottom, 3, 3), None);
        assert_eq!(far.next(Direction::TopLeft, 3, 3), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_adjacent_counts() {
        // Corners, edges and the centre of a 3x3 grid
        assert_eq!(Position::new(0, 0).adjacent(false, 3, 3).len(), 2);
        assert_eq!(Position::new(0, 0).adjacent(true, 3, 3).len(), 3);
        assert_eq!(Position::new(1, 0).adjacent(true, 3, 3).len(), 5);
        assert_eq!(Position::new(1, 1).adjacent(false, 3, 3).len(), 4);
        assert_eq!(Position::new(1, 1).adjacent(true, 3, 3).len(), 8);

        // A single row has no diagonals at all
        assert_eq!(Position::new(1, 0).adjacent(true, 3, 1).len(), 2);
        assert!(Position::new(0, 0).adjacent(true, 1, 1).is_empty());
    }

    #[test]
    fn test_as_index() {
        assert_eq!(Position::new(2, 1).as_index(3), 5);
        assert_eq!(Position::new(0, 0).as_index(3), 0);
    }

    #[test]
    fn test_is_adjacent() {
        let a = Position::new(1, 1);
        assert!(a.is_adjacent(&Position::new(1, 0), false));
        assert!(!a.is_adjacent(&Position::new(2, 2), false));
        assert!(a.is_adjacent(&Position::new(2, 2), true));
        assert!(!a.is_adjacent(&a, true));
        assert!(!a.is_adjacent(&Position::new(3, 1), true));
    }
}
