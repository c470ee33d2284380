use crate::{
    AdjacencyRule, Board, Cell, Coordinate, Dictionary, NewError, PlayerId, Rack, Racks, Scores,
    Staged, Tile, TileDistribution, TileSupply, TurnError, Word, MIN_PLAYERS, RACK_LEN,
};
use rand::Rng;
use std::collections::{BTreeSet, HashSet};
use tracing::info;

pub use stage::*;
pub use view::*;

mod end_turn;
mod rollback;
mod stage;
#[cfg(test)]
mod test_setup;
mod view;

/// Owns the whole state of one game and moves it through each turn.
///
/// Every turn starts in the staging state for the current player. [Tiles](Tile) are moved from
/// the current player's rack onto the board with [stage_tile](TurnController::stage_tile) or
/// [stage_plays](TurnController::stage_plays). [end_turn](TurnController::end_turn) either
/// commits the staged letters (board, score, refill and next player all at once) or changes
/// nothing, and [rollback](TurnController::rollback) puts every staged [tile](Tile) back into
/// its rack slot so the same player may try again.
#[derive(Debug)]
pub struct TurnController<D> {
    /// This is a bag of all the [tiles](Tile) that haven't been drawn yet.
    supply: TileSupply,
    /// Letters committed in earlier turns.
    board: Board,
    /// A vector of racks for each player.
    racks: Racks,
    /// A vector of scores for each player.
    scores: Scores,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// Letters staged this turn, not yet part of `board`.
    staged: Staged,
    /// Every staged [tile](Tile) in the order it left the rack.
    rollback_log: Vec<StagedTile>,
    /// How the latest turn attempt ended.
    turn_state: TurnState,
    /// Which neighbors satisfy adjacency after the opening move.
    adjacency: AdjacencyRule,
    /// The lookup of legal words.
    dictionary: D,
}

/// How the latest attempt at a turn ended.
///
/// Whatever the state, the current player may stage [tiles](Tile). Staging always returns
/// the controller to [TurnState::Staging].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TurnState {
    /// A turn is open: the game just started or [tiles](Tile) were staged since the last
    /// commit or rollback. A refused [end_turn](TurnController::end_turn) stays here.
    #[default]
    Staging,
    /// The previous player's [tiles](Tile) were committed and the next player has staged
    /// nothing yet.
    Committed,
    /// The current player's staged [tiles](Tile) went back to their rack and nothing has been
    /// staged since.
    RolledBack,
}

/// One entry of the rollback log: where a [tile](Tile) came from and where it went.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct StagedTile {
    /// The rack slot the [tile](Tile) was removed from.
    pub slot: usize,
    /// The [tile](Tile) as it was in the rack, so blanks go back as blanks.
    pub tile: Tile,
    /// The board [coordinate](Coordinate) it was staged on.
    pub coordinate: Coordinate,
}

/// What a successful [end_turn](TurnController::end_turn) committed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TurnSummary {
    /// The player who committed the turn.
    pub player: PlayerId,
    /// The points added to their score.
    pub points: usize,
    /// Every [word](Word) formed by the committed letters.
    pub words: BTreeSet<Word>,
    /// The number of [tiles](Tile) drawn to refill their rack.
    pub drawn: usize,
}

impl<D: Dictionary> TurnController<D> {
    /// Starts a game with the thread local random number generator.
    ///
    /// # See Also
    ///
    /// * [TurnController::new_with_rng]
    pub fn new(
        players_len: usize,
        distribution: Option<TileDistribution>,
        adjacency: Option<AdjacencyRule>,
        dictionary: D,
    ) -> Result<TurnController<D>, HashSet<NewError>> {
        TurnController::new_with_rng(
            players_len,
            distribution,
            adjacency,
            dictionary,
            &mut rand::thread_rng(),
        )
    }

    /// Checks that there are at least [MIN_PLAYERS] players and that the distribution holds
    /// some [tiles](Tile). Builds and shuffles the supply, then deals a rack of up to
    /// [RACK_LEN] [tiles](Tile) to each player in order. Player `0` moves first.
    ///
    /// When `distribution` and/or `adjacency` are [None], [TileDistribution::default] and
    /// [AdjacencyRule::default] are used respectively.
    ///
    /// # Arguments
    ///
    /// * `players_len`: The number of players in the game.
    /// * `distribution`: The number of copies of each [tile](Tile) in the supply.
    /// * `adjacency`: Which neighbors satisfy adjacency after the opening move.
    /// * `dictionary`: The lookup of legal words.
    /// * `rng`: The source of randomness for the shuffle.
    ///
    /// # Errors
    ///
    /// * [NewError::NotEnoughPlayers] Attempting to start with fewer than [MIN_PLAYERS] players.
    /// * [NewError::EmptyBag] Attempting to start with a distribution of no [tiles](Tile).
    pub fn new_with_rng<R: Rng + ?Sized>(
        players_len: usize,
        distribution: Option<TileDistribution>,
        adjacency: Option<AdjacencyRule>,
        dictionary: D,
        rng: &mut R,
    ) -> Result<TurnController<D>, HashSet<NewError>> {
        let distribution = distribution.unwrap_or_default();
        TurnController::<D>::check(players_len, &distribution)?;

        let mut supply = TileSupply::new_with_rng(&distribution, rng);
        let racks: Racks = (0..players_len)
            .map(|_| {
                let mut rack = Rack::new();
                rack.draw_into(&mut supply, RACK_LEN);
                rack
            })
            .collect();
        let scores: Scores = (0..players_len).map(|_| 0).collect();
        info!(
            players = players_len,
            supply = supply.remaining_count(),
            "started game"
        );

        Ok(TurnController {
            supply,
            board: Board::new(),
            racks,
            scores,
            current_player: 0,
            staged: Staged::new(),
            rollback_log: Vec::with_capacity(RACK_LEN),
            turn_state: TurnState::Staging,
            adjacency: adjacency.unwrap_or_default(),
            dictionary,
        })
    }

    /// # Errors
    ///
    /// * [NewError::NotEnoughPlayers] Attempting to start with fewer than [MIN_PLAYERS] players.
    /// * [NewError::EmptyBag] Attempting to start with a distribution of no [tiles](Tile).
    fn check(players_len: usize, distribution: &TileDistribution) -> Result<(), HashSet<NewError>> {
        let mut errors = HashSet::with_capacity(2);
        if players_len < MIN_PLAYERS {
            errors.insert(NewError::NotEnoughPlayers { players_len });
        }
        if distribution.total() == 0 {
            errors.insert(NewError::EmptyBag);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}

impl<D> TurnController<D> {
    /// # Errors
    ///
    /// * [TurnError::OutOfBounds] when `coordinate` is outside the board.
    /// * [TurnError::CellOccupied] when `coordinate` holds a committed or staged letter.
    fn check_cell(&self, coordinate: Coordinate) -> Result<(), TurnError> {
        match self.board.cell_at(coordinate)? {
            Cell::Empty if !self.staged.contains_key(&coordinate) => Ok(()),
            _ => Err(TurnError::CellOccupied { coordinate }),
        }
    }

    /// # Returns
    ///
    /// The player whose turn it is.
    #[inline]
    pub fn current_player_id(&self) -> PlayerId {
        PlayerId(self.current_player)
    }

    /// # Returns
    ///
    /// The number of players in the game.
    #[inline]
    pub fn players_len(&self) -> usize {
        self.racks.len()
    }

    /// # Returns
    ///
    /// The [tiles](Tile) held by `player` or [None] if out of bounds.
    pub fn rack_snapshot(&self, player: PlayerId) -> Option<&Rack> {
        self.racks.get(player.index())
    }

    /// # Returns
    ///
    /// A vector of racks for each player.
    pub fn racks(&self) -> &Racks {
        &self.racks
    }

    /// # Returns
    ///
    /// The score of `player` or [None] if out of bounds.
    pub fn score_snapshot(&self, player: PlayerId) -> Option<usize> {
        self.scores.get(player.index()).copied()
    }

    /// # Returns
    ///
    /// The committed board with this turn's staged letters drawn on top.
    pub fn board_snapshot(&self) -> Board {
        let mut board = self.board.clone();
        for (&coordinate, &placed) in &self.staged {
            board.set_cell(coordinate, placed).unwrap_or_else(|error| {
                unreachable!("staged coordinate ({:?}) was checked: {}", coordinate, error)
            });
        }
        board
    }

    /// # Returns
    ///
    /// The board holding only committed letters.
    pub fn committed_board(&self) -> &Board {
        &self.board
    }

    /// # Returns
    ///
    /// The letters staged this turn.
    pub fn staged(&self) -> &Staged {
        &self.staged
    }

    /// # Returns
    ///
    /// The staged [tiles](Tile) in the order they left the rack.
    pub fn rollback_log(&self) -> &[StagedTile] {
        &self.rollback_log
    }

    /// # Returns
    ///
    /// The number of [tiles](Tile) left in the supply.
    pub fn supply_len(&self) -> usize {
        self.supply.remaining_count()
    }

    /// # Returns
    ///
    /// How the latest turn attempt ended.
    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    /// # Returns
    ///
    /// Which neighbors satisfy adjacency after the opening move.
    pub fn adjacency(&self) -> AdjacencyRule {
        self.adjacency
    }

    /// # Returns
    ///
    /// The lookup of legal words.
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }
}
