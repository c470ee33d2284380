use crate::{
    random_board, random_current_player, random_players, random_racks, random_scores,
    random_supply, AdjacencyRule, Board, Coordinate, Letter, Rack, Racks, Scores, Staged, Tile,
    TileSupply, TurnController, TurnState, WordList, RACK_LEN,
};
use rand::Rng;

impl<D> TurnController<D> {
    /// Generates an empty [TurnController] with no players.
    ///
    /// # Returns
    ///
    /// A [TurnController] struct with the properties set to the following:
    /// * `supply`: An empty supply.
    /// * `board`: An empty board.
    /// * `racks`: An empty racks vector.
    /// * `scores`: An empty scores vector.
    /// * `current_player`: `0`.
    /// * `staged`: Nothing staged.
    /// * `turn_state`: [TurnState::Staging].
    /// * `adjacency`: [AdjacencyRule::AnyOccupied].
    pub fn empty_controller(dictionary: D) -> TurnController<D> {
        TurnController {
            supply: TileSupply::from_tiles(Vec::new()),
            board: Board::new(),
            racks: Racks::new(),
            scores: Scores::new(),
            current_player: 0,
            staged: Staged::new(),
            rollback_log: Vec::with_capacity(RACK_LEN),
            turn_state: TurnState::Staging,
            adjacency: AdjacencyRule::default(),
            dictionary,
        }
    }

    /// A mutable reference to `self.supply`.
    pub fn mut_supply(&mut self) -> &mut TileSupply {
        &mut self.supply
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to `self.racks`.
    pub fn mut_racks(&mut self) -> &mut Racks {
        &mut self.racks
    }

    /// A mutable reference to `self.scores`.
    pub fn mut_scores(&mut self) -> &mut Scores {
        &mut self.scores
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }

    /// A mutable reference to `self.adjacency`.
    pub fn mut_adjacency(&mut self) -> &mut AdjacencyRule {
        &mut self.adjacency
    }

    /// A mutable reference to `self.dictionary`.
    pub fn mut_dictionary(&mut self) -> &mut D {
        &mut self.dictionary
    }

    /// It inserts a random, small number (at least `2`) of empty racks into racks and
    /// `0`s into scores.
    ///
    /// # Returns
    ///
    /// The number of additional scores/racks.
    pub fn random_players<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_players(rng, &mut self.scores, &mut self.racks)
    }

    /// It fills the supply with a random, small, non-zero number of [tiles](Tile).
    ///
    /// # Returns
    ///
    /// The number of [tiles](Tile) in the supply.
    pub fn random_supply<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_supply(rng, &mut self.supply)
    }

    /// It fills every rack up to [RACK_LEN] with random [tiles](Tile).
    ///
    /// # Returns
    ///
    /// The number of additional [tiles](Tile) across all racks.
    pub fn random_racks<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_racks(rng, &mut self.racks)
    }

    /// It sets every score to a random, small number.
    pub fn random_scores<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        random_scores(rng, &mut self.scores)
    }

    /// If there are players, sets the current player to one of them at random.
    ///
    /// # Returns
    ///
    /// The index of the player whose turn it is.
    pub fn random_current_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let players = self.racks.len();
        random_current_player(rng, &mut self.current_player, players)
    }

    /// It commits a horizontal run of random letters at a random row of the board.
    ///
    /// # Returns
    ///
    /// The [coordinates](Coordinate) written to, left to right.
    pub fn random_board<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Coordinate> {
        random_board(rng, &mut self.board)
    }
}

impl TurnController<WordList> {
    /// A two player game on an empty board where player `0` holds `C A T X X X X`,
    /// player `1` holds seven `O`s and the supply holds ten `E`s.
    ///
    /// The dictionary holds `CAT`, `CATS`, `AT`, `TO`, `OX` and `TOE`.
    pub fn cat_controller() -> TurnController<WordList> {
        let mut controller =
            TurnController::empty_controller(WordList::from_text("cat cats at to ox toe"));
        controller.supply = TileSupply::from_tiles(vec![Tile::Letter(Letter::E); 10]);
        controller.racks.push(
            [Letter::C, Letter::A, Letter::T]
                .into_iter()
                .chain([Letter::X; 4])
                .map(Tile::Letter)
                .collect::<Rack>(),
        );
        controller
            .racks
            .push(vec![Tile::Letter(Letter::O); RACK_LEN].into_iter().collect());
        controller.scores.extend([0, 0]);
        controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_controller() {
        let controller = TurnController::empty_controller(WordList::default());

        assert_eq!(0, controller.supply_len());
        assert!(controller.committed_board().is_empty_board());
        assert_eq!(0, controller.players_len());
        assert!(controller.staged().is_empty());
        assert!(controller.rollback_log().is_empty());
    }

    #[test]
    fn random_controller() {
        let mut rng = rand::thread_rng();
        let mut controller = TurnController::empty_controller(WordList::default());
        let players = controller.random_players(&mut rng);
        controller.random_racks(&mut rng);
        controller.random_scores(&mut rng);
        let current_player = controller.random_current_player(&mut rng);

        assert_eq!(players, controller.players_len());
        assert!(controller.racks().iter().all(|rack| rack.len() == RACK_LEN));
        assert!(current_player < players);
    }

    #[test]
    fn cat_controller() {
        let controller = TurnController::cat_controller();

        assert_eq!(2, controller.players_len());
        assert_eq!(10, controller.supply_len());
        assert_eq!(RACK_LEN, controller.racks()[0].len());
        assert_eq!(RACK_LEN, controller.racks()[1].len());
        assert_eq!(Tile::Letter(Letter::C), controller.racks()[0][0]);
    }
}
