use crate::{TurnController, TurnState};
use tracing::{info, instrument};

impl<D> TurnController<D> {
    /// Returns every [tile](crate::Tile) staged this turn to the exact rack slot it came from.
    ///
    /// [Tiles](crate::Tile) go back in reverse staging order so each slot index is valid again
    /// when its [tile](crate::Tile) is reinserted. A [blank](crate::Tile::Blank) goes back as
    /// a [blank](crate::Tile::Blank) and forgets its resolved letter. The turn does not pass and
    /// no [tiles](crate::Tile) are drawn. Rolling back with nothing staged does nothing.
    ///
    /// # Returns
    ///
    /// The number of [tiles](crate::Tile) returned to the rack.
    #[instrument(skip(self), fields(player = self.current_player))]
    pub fn rollback(&mut self) -> usize {
        let rack = &mut self.racks[self.current_player];
        let returned = self.rollback_log.len();
        for staged in self.rollback_log.drain(..).rev() {
            self.staged.remove(&staged.coordinate);
            rack.insert_at(staged.slot, staged.tile).unwrap_or_else(|error| {
                unreachable!("slot ({:?}) is restored in reverse order: {}", staged.slot, error)
            });
        }
        self.turn_state = TurnState::RolledBack;
        info!(returned, "rolled back");

        returned
    }
}
