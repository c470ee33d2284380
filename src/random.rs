use crate::{
    Board, Coordinate, PlacedLetter, Rack, Racks, Scores, Tile, TileSupply, BOARD_SIZE,
    PLAYER_CAPACITY, RACK_LEN,
};
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// It inserts a random, small number (at least `2`) of empty racks into racks and
/// `0`s into scores.
///
/// # Returns
///
/// The number of additional scores/racks.
pub fn random_players<R: Rng + ?Sized>(rng: &mut R, scores: &mut Scores, racks: &mut Racks) -> usize {
    let players = rng.gen_range(2..=PLAYER_CAPACITY);
    for _ in 0..players {
        scores.push(0);
        racks.push(Rack::new());
    }

    players
}

/// It fills a supply with a random, small, non-zero number of [tiles](Tile).
///
/// # Returns
///
/// The number of [tiles](Tile) in the supply.
pub fn random_supply<R: Rng + ?Sized>(rng: &mut R, supply: &mut TileSupply) -> usize {
    let supply_len = rng.gen_range(10..20);
    *supply = TileSupply::from_tiles((0..supply_len).map(|_| rng.gen::<Tile>()).collect());

    supply_len
}

/// It fills every rack up to [RACK_LEN] with random [tiles](Tile).
///
/// # Returns
///
/// The number of additional [tiles](Tile) across all racks.
pub fn random_racks<R: Rng + ?Sized>(rng: &mut R, racks: &mut Racks) -> usize {
    let mut added = 0;
    for rack in racks.iter_mut() {
        let missing = RACK_LEN.saturating_sub(rack.len());
        rack.extend((0..missing).map(|_| rng.gen::<Tile>()));
        added += missing;
    }

    added
}

/// It sets every score to a random, small number.
pub fn random_scores<R: Rng + ?Sized>(rng: &mut R, scores: &mut Scores) {
    for score in scores.iter_mut() {
        *score = rng.gen_range(0..100);
    }
}

/// If `players` is not `0`, sets the current player to a random number between `0` inclusive
/// and `players` exclusive. Otherwise, does nothing.
///
/// # Returns
///
/// The index of the player whose turn it is.
pub fn random_current_player<R: Rng + ?Sized>(
    rng: &mut R,
    current_player: &mut usize,
    players: usize,
) -> usize {
    if players > 0 {
        *current_player = rng.gen_range(0..players);
    }

    *current_player
}

/// It writes a horizontal run of random letters at a random row of the board.
///
/// # Returns
///
/// The [coordinates](Coordinate) written to, left to right.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> Vec<Coordinate> {
    let row = rng.gen_range(0..BOARD_SIZE);
    let start = rng.gen_range(0..BOARD_SIZE - 1);
    let end = rng.gen_range(start + 1..BOARD_SIZE);

    (start..=end)
        .map(|col| (row, col))
        .inspect(|&coordinate| {
            board
                .set_cell(coordinate, PlacedLetter::lettered(rng.gen()))
                .unwrap_or_else(|error| {
                    unreachable!("run ({:?}) is inside the board: {}", coordinate, error)
                });
        })
        .collect()
}

/// A random [coordinate](Coordinate) on the board.
pub fn random_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    let possible = Uniform::from(0..BOARD_SIZE);
    (possible.sample(rng), possible.sample(rng))
}

/// An [iterator](Iterator) of [coordinates](Coordinate) where some component lies outside
/// the board, one for each way of leaving it.
pub fn random_out_of_bounds_coordinates<R: Rng + ?Sized>(
    rng: &mut R,
) -> impl Iterator<Item = Coordinate> {
    let possible = Uniform::from(0..BOARD_SIZE);
    let possible_outside = Uniform::from(BOARD_SIZE..usize::MAX);
    [
        (possible_outside.sample(rng), possible.sample(rng)),
        (possible.sample(rng), possible_outside.sample(rng)),
        (possible_outside.sample(rng), possible_outside.sample(rng)),
    ]
    .tap_mut(|coordinates| coordinates.shuffle(rng))
    .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{in_bounds, Cell};
    use itertools::Itertools;

    #[test]
    fn random_players_empty() {
        let mut scores = Scores::new();
        let mut racks = Racks::new();

        let players = random_players(&mut rand::thread_rng(), &mut scores, &mut racks);

        assert!((2..=PLAYER_CAPACITY).contains(&players));
        assert_eq!(players, scores.len());
        assert_eq!(players, racks.len());
        for player in 0..players {
            assert_eq!(0, scores[player]);
            assert!(racks[player].is_empty());
        }
    }

    #[test]
    fn random_supply_len() {
        let mut supply = TileSupply::from_tiles(Vec::new());

        let supply_len = random_supply(&mut rand::thread_rng(), &mut supply);

        assert!((10..20).contains(&supply_len));
        assert_eq!(supply_len, supply.remaining_count());
    }

    #[test]
    fn random_racks_fill() {
        let mut rng = rand::thread_rng();
        let mut scores = Scores::new();
        let mut racks = Racks::new();
        let players = random_players(&mut rng, &mut scores, &mut racks);

        assert_eq!(players * RACK_LEN, random_racks(&mut rng, &mut racks));
        assert!(racks.iter().all(|rack| rack.len() == RACK_LEN));
        assert_eq!(0, random_racks(&mut rng, &mut racks));
    }

    #[test]
    fn random_current_player_in_range() {
        let mut current_player = 0;

        let player = random_current_player(&mut rand::thread_rng(), &mut current_player, 3);

        assert!(player < 3);
        assert_eq!(player, current_player);
    }

    #[test]
    fn random_current_player_no_players() {
        let mut current_player = 0;

        assert_eq!(0, random_current_player(&mut rand::thread_rng(), &mut current_player, 0));
    }

    #[test]
    fn random_board_run() {
        let mut board = Board::new();

        let coordinates = random_board(&mut rand::thread_rng(), &mut board);

        assert!(coordinates.len() >= 2);
        assert_eq!(coordinates.len(), board.occupied_len());
        assert_eq!(1, coordinates.iter().map(|&(row, _)| row).unique().count());
        for coordinate in coordinates {
            assert!(matches!(board.cell_at(coordinate), Ok(Cell::Occupied(_))));
        }
    }

    #[test]
    fn coordinates_inside_and_outside() {
        let mut rng = rand::thread_rng();

        assert!(in_bounds(random_coordinate(&mut rng)));
        assert_eq!(3, random_out_of_bounds_coordinates(&mut rng).count());
        assert!(random_out_of_bounds_coordinates(&mut rng).all(|coordinate| !in_bounds(coordinate)));
    }
}
