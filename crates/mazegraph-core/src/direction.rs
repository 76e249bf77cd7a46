//! Cardinal directions between adjacent maze cells.

use crate::geom::Point;

/// One of the four cardinal directions, in screen coordinates (Y grows
/// down, so [`Direction::Above`] is `y - 1`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Above,
    Below,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the maze adapter probes them.
    pub const ALL: [Direction; 4] = [
        Direction::Above,
        Direction::Below,
        Direction::Right,
        Direction::Left,
    ];

    /// Unit offset of one step in this direction.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::Above => Point::new(0, -1),
            Direction::Below => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }

    /// The direction pointing back.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Above => Direction::Below,
            Direction::Below => Direction::Above,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Bit index of this direction, used for packed wall masks.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::Above => 0,
            Direction::Below => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// The neighbour of `p` one step in this direction.
    #[inline]
    pub fn step(self, p: Point) -> Point {
        p + self.offset()
    }
}
