use crate::PlacedLetter;

/// Sums the points of every [letter](PlacedLetter) placed this turn.
///
/// Each placed letter counts exactly once, even when it is part of both a horizontal and
/// a vertical word, and letters already on the board count nothing. Letters played from
/// a [blank](crate::Tile::Blank) are worth `0` whatever they were resolved to.
///
/// # See Also
///
/// * [TurnController::end_turn](crate::TurnController::end_turn)
pub fn score<'a>(placed: impl IntoIterator<Item = &'a PlacedLetter>) -> usize {
    placed.into_iter().map(|placed| placed.points()).sum()
}
