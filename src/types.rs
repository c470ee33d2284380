use crate::{Coordinate, PlacedLetter, Rack, PLAYER_CAPACITY};
use bimap::BiBTreeMap;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// A bimap of rack slots of [tiles](crate::Tile) to be staged to [coordinates](Coordinate)
/// on the board.
///
/// # See Also
///
/// * [Coordinate]
/// * [TurnController::stage_plays](crate::TurnController::stage_plays)
pub type Plays = BiBTreeMap<usize, Coordinate>;
/// An ordered map of [coordinates](Coordinate) to [letters](PlacedLetter) staged during
/// the current turn but not yet committed to the board.
///
/// # See Also
///
/// * [TurnController::stage_tile](crate::TurnController::stage_tile)
/// * [validate](crate::validate)
/// * [score](crate::score)
pub type Staged = BTreeMap<Coordinate, PlacedLetter>;
/// A vector of racks for each player.
///
/// # See Also
///
/// * [Rack]
/// * [PLAYER_CAPACITY]
pub type Racks = SmallVec<[Rack; PLAYER_CAPACITY]>;
/// A vector of scores for each player.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [TurnView](crate::TurnView)
pub type Scores = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of rack lengths.
///
/// # See Also
///
/// * [Racks]
/// * [TurnView](crate::TurnView)
pub type RackLens = SmallVec<[usize; PLAYER_CAPACITY]>;

/// The ordinal of a player, from `0` to the number of players exclusive.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Default,
    derive_more::Display,
    derive_more::From,
)]
#[display("player {}", _0)]
pub struct PlayerId(pub usize);

impl PlayerId {
    /// # Returns
    ///
    /// The index of the player into [`Racks`] and [`Scores`].
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}
