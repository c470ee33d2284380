use crate::BOARD_SIZE;

/// A tuple with two integer components for the row and the column of a cell on the board.
/// Both components lie in the range `0` inclusive to [BOARD_SIZE] exclusive when the
/// coordinate is [in bounds](in_bounds).
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [Plays](crate::Plays)
/// * [TurnError](crate::TurnError)
pub type Coordinate = (usize, usize);

/// The direction a word is read in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Axis {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Axis {
    /// # Returns
    ///
    /// An array of both [`Axis`] variants.
    #[inline]
    pub fn axes() -> [Axis; 2] {
        [Axis::Horizontal, Axis::Vertical]
    }

    /// # Returns
    ///
    /// The [coordinate](Coordinate) one step right or down along the axis, or [None] at the edge
    /// of the board.
    pub fn next(self, (row, col): Coordinate) -> Option<Coordinate> {
        let next = match self {
            Axis::Horizontal => (row, col + 1),
            Axis::Vertical => (row + 1, col),
        };
        in_bounds(next).then_some(next)
    }

    /// # Returns
    ///
    /// The [coordinate](Coordinate) one step left or up along the axis, or [None] at the edge
    /// of the board.
    pub fn previous(self, (row, col): Coordinate) -> Option<Coordinate> {
        match self {
            Axis::Horizontal => col.checked_sub(1).map(|col| (row, col)),
            Axis::Vertical => row.checked_sub(1).map(|row| (row, col)),
        }
    }
}

/// # Returns
///
/// Whether both components of `coordinate` are less than [BOARD_SIZE].
#[inline]
pub fn in_bounds((row, col): Coordinate) -> bool {
    row < BOARD_SIZE && col < BOARD_SIZE
}

/// Finds the adjacent [coordinates](Coordinate) from the argument [coordinate](Coordinate)
/// where adjacent is 4 directional and not diagonal. Neighbors outside the board are skipped.
///
/// # See Also
///
/// * [validate](crate::validate)
///
/// # Returns
///
/// An [iterator](Iterator) of up to 4 [coordinates](Coordinate) in natural lexicographic order.
pub fn adjacent_coordinates(coordinate: Coordinate) -> impl Iterator<Item = Coordinate> {
    [
        Axis::Vertical.previous(coordinate),
        Axis::Horizontal.previous(coordinate),
        Axis::Horizontal.next(coordinate),
        Axis::Vertical.next(coordinate),
    ]
    .into_iter()
    .flatten()
}
