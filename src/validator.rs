use crate::{adjacent_coordinates, extract_words, Board, Dictionary, Staged, TurnError, Word};
use std::collections::BTreeSet;
use tracing::debug;

/// Decides which occupied neighbors satisfy the adjacency rule after the opening move.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum AdjacencyRule {
    /// Any occupied neighbor counts, including [tiles](crate::Tile) staged earlier in
    /// the same turn. A group of staged [tiles](crate::Tile) touching only each other passes.
    #[default]
    AnyOccupied,
    /// Only letters committed in earlier turns count.
    CommittedOnly,
}

/// Checks whether `staged` letters may be committed onto `board`.
///
/// Rules, in order:
///
/// 1. At least one letter must be staged.
/// 2. On an empty board any placement is accepted. Otherwise some staged
/// [coordinate](crate::Coordinate) needs an occupied neighbor, as decided by `rule`.
/// 3. Every [word](Word) through a staged [coordinate](crate::Coordinate) must be in
/// the `dictionary`. A single missing word rejects the whole turn.
///
/// # Arguments
///
/// * `board`: The committed board before this turn.
/// * `staged`: The letters placed this turn.
/// * `dictionary`: The lookup of legal words.
/// * `rule`: Which neighbors satisfy adjacency.
///
/// # Errors
///
/// * [TurnError::NoTilesPlaced] when `staged` is empty.
/// * [TurnError::OutOfBounds] when a staged [coordinate](crate::Coordinate) is off the board.
/// * [TurnError::NotAdjacent] when no staged letter has a qualifying neighbor.
/// * [TurnError::InvalidWord] with the first missing word in board order.
///
/// # Returns
///
/// The [words](Word) formed by the staged letters.
pub fn validate<D: Dictionary + ?Sized>(
    board: &Board,
    staged: &Staged,
    dictionary: &D,
    rule: AdjacencyRule,
) -> Result<BTreeSet<Word>, TurnError> {
    if staged.is_empty() {
        return Err(TurnError::NoTilesPlaced);
    }

    let mut proposed = board.clone();
    for (&coordinate, &placed) in staged {
        proposed.set_cell(coordinate, placed)?;
    }

    if !board.is_empty_board() {
        let neighbors = match rule {
            AdjacencyRule::AnyOccupied => &proposed,
            AdjacencyRule::CommittedOnly => board,
        };
        let adjacent = staged.keys().any(|&coordinate| {
            adjacent_coordinates(coordinate).any(|neighbor| neighbors.is_occupied(neighbor))
        });
        if !adjacent {
            return Err(TurnError::NotAdjacent);
        }
    }

    let words = extract_words(&proposed, staged.keys().copied());
    debug!(words = words.len(), "extracted words");
    if let Some(word) = words.iter().find(|word| !dictionary.contains(&word.text)) {
        return Err(TurnError::InvalidWord {
            word: word.text.clone(),
        });
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Letter, PlacedLetter, WordList};
    use map_macro::btree_set;

    fn staged(entries: &[(Coordinate, char)]) -> Staged {
        entries
            .iter()
            .map(|&(coordinate, char)| {
                (
                    coordinate,
                    PlacedLetter::lettered(Letter::from_char(char).unwrap()),
                )
            })
            .collect()
    }

    fn commit(board: &mut Board, entries: &[(Coordinate, char)]) {
        for (coordinate, placed) in staged(entries) {
            board.set_cell(coordinate, placed).unwrap();
        }
    }

    fn dictionary() -> WordList {
        WordList::from_text("cat cats at an as")
    }

    #[test]
    fn no_tiles_placed() {
        assert_eq!(
            Err(TurnError::NoTilesPlaced),
            validate(&Board::new(), &Staged::new(), &dictionary(), AdjacencyRule::default())
        );
    }

    #[test]
    fn opening_single_tile() {
        let words = validate(
            &Board::new(),
            &staged(&[((0, 0), 'Q')]),
            &dictionary(),
            AdjacencyRule::default(),
        );

        assert_eq!(Ok(BTreeSet::new()), words);
    }

    #[test]
    fn opening_word() {
        let words = validate(
            &Board::new(),
            &staged(&[((7, 7), 'C'), ((7, 8), 'A'), ((7, 9), 'T')]),
            &dictionary(),
            AdjacencyRule::default(),
        )
        .unwrap();

        assert_eq!(
            btree_set! { "CAT".to_string() },
            words
                .into_iter()
                .map(|word| word.text)
                .collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn not_adjacent() {
        let mut board = Board::new();
        commit(&mut board, &[((7, 7), 'C'), ((7, 8), 'A'), ((7, 9), 'T')]);

        assert_eq!(
            Err(TurnError::NotAdjacent),
            validate(
                &board,
                &staged(&[((0, 0), 'A')]),
                &dictionary(),
                AdjacencyRule::default()
            )
        );
    }

    #[test]
    fn adjacent_extends_word() {
        let mut board = Board::new();
        commit(&mut board, &[((7, 7), 'C'), ((7, 8), 'A'), ((7, 9), 'T')]);

        let words = validate(
            &board,
            &staged(&[((7, 10), 'S')]),
            &dictionary(),
            AdjacencyRule::CommittedOnly,
        )
        .unwrap();

        assert_eq!(1, words.len());
    }

    #[test]
    fn same_turn_neighbors_satisfy_any_occupied() {
        let mut board = Board::new();
        commit(&mut board, &[((7, 7), 'C'), ((7, 8), 'A'), ((7, 9), 'T')]);
        let island = staged(&[((0, 0), 'A'), ((0, 1), 'T')]);

        assert!(validate(&board, &island, &dictionary(), AdjacencyRule::AnyOccupied).is_ok());
        assert_eq!(
            Err(TurnError::NotAdjacent),
            validate(&board, &island, &dictionary(), AdjacencyRule::CommittedOnly)
        );
    }

    #[test]
    fn invalid_word() {
        let words = validate(
            &Board::new(),
            &staged(&[((7, 7), 'C'), ((7, 8), 'A'), ((7, 9), 'T')]),
            &WordList::from_text("dog"),
            AdjacencyRule::default(),
        );

        assert_eq!(
            Err(TurnError::InvalidWord {
                word: "CAT".to_string()
            }),
            words
        );
    }

    #[test]
    fn one_invalid_word_rejects_all() {
        let mut board = Board::new();
        commit(&mut board, &[((7, 7), 'C'), ((7, 8), 'A'), ((7, 9), 'T')]);
        // "AN" is legal, "TS" and "NS" are not
        let both = staged(&[((8, 8), 'N'), ((8, 9), 'S')]);

        assert_eq!(
            Err(TurnError::InvalidWord {
                word: "TS".to_string()
            }),
            validate(&board, &both, &dictionary(), AdjacencyRule::default())
        );
    }

    #[test]
    fn staged_out_of_bounds() {
        let coordinate = (crate::BOARD_SIZE, 0);
        let mut out_of_bounds = Staged::new();
        out_of_bounds.insert(coordinate, PlacedLetter::lettered(Letter::A));

        assert_eq!(
            Err(TurnError::OutOfBounds { coordinate }),
            validate(&Board::new(), &out_of_bounds, &dictionary(), AdjacencyRule::default())
        );
    }
}
