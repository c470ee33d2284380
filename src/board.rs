use crate::{in_bounds, Axis, Coordinate, PlacedLetter, TurnError, BOARD_SIZE};
use either::Either;
use std::fmt;

/// The contents of one cell on the [`Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// Nothing has been placed on the cell.
    Empty,
    /// The cell holds a resolved letter.
    Occupied(PlacedLetter),
}

/// A square grid of [BOARD_SIZE] by [BOARD_SIZE] cells, each either empty or holding
/// a [placed letter](PlacedLetter).
///
/// The board knows nothing about the rules. Committed letters are never overwritten since
/// [TurnController](crate::TurnController) only writes cells it has checked are empty.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Option<PlacedLetter>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// # Returns
    ///
    /// An empty [`Board`].
    pub fn new() -> Board {
        Board::default()
    }

    /// # Errors
    ///
    /// * [TurnError::OutOfBounds] when `coordinate` is outside the board.
    pub fn cell_at(&self, coordinate: Coordinate) -> Result<Cell, TurnError> {
        let (row, col) = Board::check_bounds(coordinate)?;
        Ok(match self.cells[row][col] {
            Some(placed) => Cell::Occupied(placed),
            None => Cell::Empty,
        })
    }

    /// Writes `placed` into the cell at `coordinate`.
    ///
    /// # Errors
    ///
    /// * [TurnError::OutOfBounds] when `coordinate` is outside the board.
    pub fn set_cell(&mut self, coordinate: Coordinate, placed: PlacedLetter) -> Result<(), TurnError> {
        let (row, col) = Board::check_bounds(coordinate)?;
        self.cells[row][col] = Some(placed);
        Ok(())
    }

    /// # Returns
    ///
    /// The [placed letter](PlacedLetter) at `coordinate`, or [None] when the cell is empty or
    /// outside the board.
    #[inline]
    pub fn get(&self, (row, col): Coordinate) -> Option<PlacedLetter> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// # Returns
    ///
    /// Whether the cell at `coordinate` is on the board and holds a letter.
    #[inline]
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate).is_some()
    }

    /// # Returns
    ///
    /// Whether no cell holds a letter, which marks the opening move.
    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// # Returns
    ///
    /// An [iterator](Iterator) of every occupied cell in row then column order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, PlacedLetter)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|placed| ((row, col), placed)))
        })
    }

    /// # Returns
    ///
    /// The number of occupied cells.
    pub fn occupied_len(&self) -> usize {
        self.occupied().count()
    }

    /// # Returns
    ///
    /// An [iterator](Iterator) of [coordinates](Coordinate) from `start` inclusive to the edge
    /// of the board along `axis`. Empty when `start` is outside the board.
    pub fn line_from(start: Coordinate, axis: Axis) -> impl Iterator<Item = Coordinate> {
        let (row, col) = start;
        let len = if in_bounds(start) { BOARD_SIZE } else { 0 };
        match axis {
            Axis::Horizontal => Either::Left((col..len).map(move |col| (row, col))),
            Axis::Vertical => Either::Right((row..len).map(move |row| (row, col))),
        }
    }

    fn check_bounds(coordinate: Coordinate) -> Result<Coordinate, TurnError> {
        if in_bounds(coordinate) {
            Ok(coordinate)
        } else {
            Err(TurnError::OutOfBounds { coordinate })
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.cells {
            for cell in cells {
                match cell {
                    Some(placed) if placed.blank => {
                        write!(f, "{}", placed.letter.as_char().to_ascii_lowercase())?
                    }
                    Some(placed) => write!(f, "{}", placed.letter.as_char())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
