use crate::Coordinate;

/// Describes the reason why staging, committing or reading part of a turn could not be executed.
///
/// Every variant is recoverable: the turn stays open for the same player, who may retry or
/// [roll back](crate::TurnController::rollback).
#[derive(Debug, Clone, Eq, PartialEq, Hash, derive_more::Display, derive_more::Error)]
pub enum TurnError {
    /// Attempting to take a [tile](crate::Tile) from a rack slot that does not exist.
    #[display("rack slot {} is out of range for a rack of {} tiles", slot, rack_len)]
    SlotOutOfRange {
        /// The requested slot.
        slot: usize,
        /// The number of [tiles](crate::Tile) in the rack.
        rack_len: usize,
    },
    /// Attempting to access a [coordinate](Coordinate) outside the board.
    #[display("{:?} is outside the board", coordinate)]
    OutOfBounds {
        /// The requested [coordinate](Coordinate).
        coordinate: Coordinate,
    },
    /// Attempting to stage onto a cell already holding a committed or staged letter.
    #[display("{:?} is already occupied", coordinate)]
    CellOccupied {
        /// The occupied [coordinate](Coordinate).
        coordinate: Coordinate,
    },
    /// Attempting [to end the turn](crate::TurnController::end_turn) without staging any
    /// [tiles](crate::Tile).
    #[display("no tiles were placed this turn")]
    NoTilesPlaced,
    /// Attempting [to end the turn](crate::TurnController::end_turn) with no staged
    /// [tile](crate::Tile) next to an occupied cell.
    #[display("tiles must be adjacent to an existing word")]
    NotAdjacent,
    /// Attempting [to end the turn](crate::TurnController::end_turn) while forming a word
    /// missing from the [dictionary](crate::Dictionary).
    #[display("{} is not in the dictionary", word)]
    InvalidWord {
        /// The first word missing from the [dictionary](crate::Dictionary).
        word: String,
    },
    /// A [blank](crate::Tile::Blank) was resolved to something other than exactly one
    /// alphabetic character.
    #[display("{:?} is not a single letter", input)]
    InvalidBlankResolution {
        /// The rejected answer.
        input: String,
    },
}

/// Describes the reason why [TurnController](crate::TurnController) could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, derive_more::Display, derive_more::Error)]
pub enum NewError {
    /// Attempting [to start](crate::TurnController::new) with fewer than
    /// [MIN_PLAYERS](crate::MIN_PLAYERS) players.
    #[display("{} players is fewer than the minimum", players_len)]
    NotEnoughPlayers {
        /// The number of players requested.
        players_len: usize,
    },
    /// Attempting [to start](crate::TurnController::new) with a
    /// [distribution](crate::TileDistribution) holding no [tiles](crate::Tile).
    #[display("the tile distribution is empty")]
    EmptyBag,
}
