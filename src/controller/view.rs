use crate::{Board, PlayerId, RackLens, Scores, Staged, TurnController};

/// Immutably borrows properties from [`TurnController`] which every player may see.
#[derive(Debug)]
pub struct TurnView<'a> {
    /// The number of tiles that haven't been drawn yet.
    pub supply_len: usize,
    /// The committed board with this turn's staged letters drawn on top.
    pub board: Board,
    /// A vector of scores for each player.
    pub scores: &'a Scores,
    /// A vector of rack lengths.
    pub rack_lens: RackLens,
    /// The player whose turn it is.
    pub current_player: PlayerId,
    /// The letters staged this turn.
    pub staged: &'a Staged,
}

impl<D> TurnController<D> {
    /// # Returns
    ///
    /// A new [`TurnView`] struct, which immutably borrows properties from [`TurnController`],
    /// but with `supply` replaced by its length and `racks` replaced by the number
    /// of tiles in each rack.
    pub fn view(&self) -> TurnView<'_> {
        TurnView {
            supply_len: self.supply.remaining_count(),
            board: self.board_snapshot(),
            scores: &self.scores,
            rack_lens: self.racks.iter().map(|rack| rack.len()).collect(),
            current_player: self.current_player_id(),
            staged: &self.staged,
        }
    }
}
