use crate::{
    score, validate, Dictionary, TurnController, TurnError, TurnState, TurnSummary, RACK_LEN,
};
use itertools::Itertools;
use std::mem;
use tracing::{info, instrument, warn};

impl<D: Dictionary> TurnController<D> {
    /// Attempts to commit the letters staged this turn.
    ///
    /// On success, and all at once: the staged letters become part of the board, their
    /// points are added to the current player's score, the current player's rack is refilled
    /// from the supply up to [RACK_LEN] [tiles](crate::Tile) (or fewer when the supply runs
    /// out), and the turn passes to the next player.
    ///
    /// On failure nothing changes. The staged letters stay staged so the current player may
    /// stage more, [roll back](TurnController::rollback), or try again.
    ///
    /// # Errors
    ///
    /// * [TurnError::NoTilesPlaced] when nothing is staged.
    /// * [TurnError::NotAdjacent] when the staged letters touch nothing already on the board.
    /// * [TurnError::InvalidWord] with the first word formed which is not in the dictionary.
    ///
    /// # Returns
    ///
    /// What was committed.
    #[instrument(skip(self), fields(player = self.current_player, staged = self.staged.len()))]
    pub fn end_turn(&mut self) -> Result<TurnSummary, TurnError> {
        let words = validate(&self.board, &self.staged, &self.dictionary, self.adjacency)
            .map_err(|error| {
                warn!(%error, "refused turn");
                error
            })?;
        let points = score(self.staged.values());

        for (coordinate, placed) in mem::take(&mut self.staged) {
            self.board.set_cell(coordinate, placed).unwrap_or_else(|error| {
                unreachable!("staged coordinate ({:?}) was checked: {}", coordinate, error)
            });
        }
        self.rollback_log.clear();
        self.scores[self.current_player] += points;
        let drawn = self.racks[self.current_player].draw_into(&mut self.supply, RACK_LEN);

        let summary = TurnSummary {
            player: self.current_player_id(),
            points,
            words,
            drawn,
        };
        info!(
            player = %summary.player,
            points,
            words = %summary.words.iter().map(|word| &word.text).join(","),
            drawn,
            "committed turn"
        );
        self.current_player = (self.current_player + 1) % self.racks.len();
        self.turn_state = TurnState::Committed;

        Ok(summary)
    }
}
