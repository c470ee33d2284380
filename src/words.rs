use crate::{Axis, Board, Coordinate};
use std::collections::BTreeSet;

/// A maximal run of two or more occupied cells along one [axis](Axis).
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Word {
    /// The first [coordinate](Coordinate) of the run, its leftmost or topmost cell.
    pub start: Coordinate,
    /// The direction the run is read in.
    pub axis: Axis,
    /// The upper case letters of the run.
    pub text: String,
}

/// Finds every word passing through at least one of the `placed` [coordinates](Coordinate).
///
/// For each placed [coordinate](Coordinate) and each [axis](Axis), walks back while the
/// previous cell is occupied to find the start of the run, then reads forward until an empty
/// cell or the edge of the board. Runs of a single cell are not words. Runs found from several
/// placed [coordinates](Coordinate) are only returned once, and runs which touch no placed
/// [coordinate](Coordinate) are never traced.
///
/// # Arguments
///
/// * `board`: The board including the letters placed this turn.
/// * `placed`: The [coordinates](Coordinate) of the letters placed this turn.
///
/// # See Also
///
/// * [validate](crate::validate)
pub fn extract_words(
    board: &Board,
    placed: impl IntoIterator<Item = Coordinate>,
) -> BTreeSet<Word> {
    let mut words = BTreeSet::new();
    for coordinate in placed {
        if !board.is_occupied(coordinate) {
            continue;
        }
        for axis in Axis::axes() {
            let start = find_start(board, coordinate, axis);
            let text: String = Board::line_from(start, axis)
                .map_while(|coordinate| board.get(coordinate))
                .map(|placed| placed.letter.as_char())
                .collect();
            if text.len() > 1 {
                words.insert(Word { start, axis, text });
            }
        }
    }
    words
}

fn find_start(board: &Board, mut coordinate: Coordinate, axis: Axis) -> Coordinate {
    while let Some(previous) = axis.previous(coordinate) {
        if !board.is_occupied(previous) {
            break;
        }
        coordinate = previous;
    }
    coordinate
}
