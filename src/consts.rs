use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of rows and the number of columns on the board. `15` by `15` cells.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [Coordinate](crate::Coordinate)
pub const BOARD_SIZE: usize = 15;
/// The number of [tiles](crate::Tile) a rack is refilled up to. `7` tiles.
///
/// # See Also
///
/// * [Rack::draw_into](crate::Rack::draw_into)
/// * [TurnController::end_turn](crate::TurnController::end_turn)
pub const RACK_LEN: usize = 7;
/// The minimum number of players in a game. `2` players.
///
/// # See Also
///
/// * [TurnController::new](crate::TurnController::new)
pub const MIN_PLAYERS: usize = 2;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. When there are more than
/// `PLAYER_CAPACITY` players, player data will be heap allocated. If the environment variable
/// named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `4`.
///
/// # See Also
///
/// * [Racks](crate::Racks)
/// * [Scores](crate::Scores)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
/// [Tiles](crate::Tile) in a rack will be stored on the stack until the rack holds more than
/// `RACK_CAPACITY` [tiles](crate::Tile). If the environment variable named `RACK_CAPACITY` is
/// present at compile time and is able to be parsed into a `usize`, set to the value of
/// the environment variable. Otherwise, it is set to [RACK_LEN].
///
/// # See Also
///
/// * [Rack](crate::Rack)
pub const RACK_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("RACK_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    RACK_LEN
);
const _: () = assert!(BOARD_SIZE > 0);
const _: () = assert!(MIN_PLAYERS > 0);
