use crate::{
    Coordinate, Letter, PlacedLetter, Plays, StagedTile, Tile, TurnController, TurnError,
    TurnState,
};
use itertools::Itertools;
use std::collections::HashSet;
use tracing::{debug, instrument};

impl<D> TurnController<D> {
    /// Moves the [tile](Tile) at `slot` of the current player's rack onto the board at
    /// `coordinate` for this turn only. When the [tile](Tile) is a [blank](Tile::Blank),
    /// `resolver` is asked once for the letter it represents.
    ///
    /// Nothing changes unless the [tile](Tile) is staged.
    ///
    /// # Arguments
    ///
    /// * `slot`: The rack slot of the [tile](Tile) to stage.
    /// * `coordinate`: The empty board cell to stage it on.
    /// * `resolver`: Answers which letter a [blank](Tile::Blank) represents, or [None] when
    /// the question goes unanswered.
    ///
    /// # Errors
    ///
    /// * [TurnError::OutOfBounds] when `coordinate` is outside the board.
    /// * [TurnError::CellOccupied] when `coordinate` already holds a committed or staged letter.
    /// * [TurnError::SlotOutOfRange] when `slot` is not in the current player's rack.
    /// * [TurnError::InvalidBlankResolution] when `resolver` answers anything but exactly one
    /// alphabetic character.
    ///
    /// # Returns
    ///
    /// The staged [letter](PlacedLetter), or [None] when `resolver` gave no answer and
    /// the attempt was dropped.
    #[instrument(skip(self, resolver))]
    pub fn stage_tile(
        &mut self,
        slot: usize,
        coordinate: Coordinate,
        resolver: impl FnOnce() -> Option<String>,
    ) -> Result<Option<PlacedLetter>, TurnError> {
        self.check_cell(coordinate)?;
        let tile = self.racks[self.current_player].check_slot(slot)?;
        let Some(placed) = resolve(tile, resolver)? else {
            debug!("blank left unresolved");
            return Ok(None);
        };

        let tile = self.racks[self.current_player].remove_at(slot)?;
        self.staged.insert(coordinate, placed);
        self.rollback_log.push(StagedTile {
            slot,
            tile,
            coordinate,
        });
        self.turn_state = TurnState::Staging;
        debug!(letter = %placed.letter.as_char(), "staged tile");

        Ok(Some(placed))
    }

    /// Stages several [tiles](Tile) at once. Either every [play](Plays) is staged or none is.
    ///
    /// All slots and [coordinates](Coordinate) are checked before anything moves, then
    /// `resolver` is asked once for each [blank](Tile::Blank) in ascending slot order.
    /// [Tiles](Tile) leave the rack in descending slot order so the remaining slots stay put.
    ///
    /// # Arguments
    ///
    /// * `plays`: A bimap of rack slots to empty board [coordinates](Coordinate).
    /// * `resolver`: Answers which letter each [blank](Tile::Blank) represents.
    ///
    /// # Errors
    ///
    /// * [TurnError::NoTilesPlaced] when `plays` is empty.
    /// * [TurnError::SlotOutOfRange] for every slot not in the current player's rack.
    /// * [TurnError::OutOfBounds] for every [coordinate](Coordinate) outside the board.
    /// * [TurnError::CellOccupied] for every [coordinate](Coordinate) already holding a letter.
    /// * [TurnError::InvalidBlankResolution] for every rejected answer.
    ///
    /// # Returns
    ///
    /// The number of staged [tiles](Tile), `0` when some [blank](Tile::Blank) was
    /// left unanswered before any answer was rejected.
    #[instrument(skip(self, plays, resolver), fields(plays = plays.len()))]
    pub fn stage_plays(
        &mut self,
        plays: &Plays,
        mut resolver: impl FnMut() -> Option<String>,
    ) -> Result<usize, HashSet<TurnError>> {
        let mut errors = HashSet::with_capacity(plays.len());
        if plays.is_empty() {
            errors.insert(TurnError::NoTilesPlaced);
            return Err(errors);
        }

        let rack = &self.racks[self.current_player];
        let mut checked = Vec::with_capacity(plays.len());
        for (&slot, &coordinate) in plays {
            if let Err(error) = self.check_cell(coordinate) {
                errors.insert(error);
            }
            match rack.check_slot(slot) {
                Ok(tile) => checked.push((slot, coordinate, tile)),
                Err(error) => {
                    errors.insert(error);
                }
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut resolved = Vec::with_capacity(checked.len());
        for (slot, coordinate, tile) in checked {
            match resolve(tile, &mut resolver) {
                Ok(Some(placed)) => resolved.push((slot, coordinate, placed)),
                Ok(None) if errors.is_empty() => {
                    debug!("blank left unresolved");
                    return Ok(0);
                }
                Ok(None) => return Err(errors),
                Err(error) => {
                    errors.insert(error);
                }
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        // highest slot first so lower slots do not shift
        let rack = &mut self.racks[self.current_player];
        for (slot, coordinate, placed) in resolved.into_iter().rev() {
            let tile = rack.remove_at(slot).unwrap_or_else(|error| {
                unreachable!("slot ({:?}) was checked before staging: {}", slot, error)
            });
            self.staged.insert(coordinate, placed);
            self.rollback_log.push(StagedTile {
                slot,
                tile,
                coordinate,
            });
        }
        self.turn_state = TurnState::Staging;
        debug!(
            staged = %self.staged.values().map(|placed| placed.letter.as_char()).join(""),
            "staged plays"
        );

        Ok(plays.len())
    }
}

/// Turns a rack [tile](Tile) into the [letter](PlacedLetter) it shows on the board, asking
/// `resolver` only for [blanks](Tile::Blank).
fn resolve(
    tile: Tile,
    resolver: impl FnOnce() -> Option<String>,
) -> Result<Option<PlacedLetter>, TurnError> {
    match tile {
        Tile::Letter(letter) => Ok(Some(PlacedLetter::lettered(letter))),
        Tile::Blank => resolver()
            .map(|input| parse_blank(&input).map(PlacedLetter::blank))
            .transpose(),
    }
}

/// Reads the letter a [blank](Tile::Blank) stands for, in either case.
///
/// # Errors
///
/// * [TurnError::InvalidBlankResolution] when `input` is not exactly one alphabetic character.
pub fn parse_blank(input: &str) -> Result<Letter, TurnError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(char), None) => Letter::from_char(char),
        _ => None,
    }
    .ok_or_else(|| TurnError::InvalidBlankResolution {
        input: input.to_string(),
    })
}
