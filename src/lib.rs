//! Concrete structs to represent and protect the state of a word-tile board game with methods
//! to stage, validate, score and commit each turn.
//!
//! ## Summary
//!
//! Players share a [BOARD_SIZE] by [BOARD_SIZE] [board](Board) and a shuffled
//! [supply](TileSupply) of lettered and [blank](Tile::Blank) [tiles](Tile). Each player holds a
//! private [rack](Rack) of up to [RACK_LEN] [tiles](Tile). On their turn the current player moves
//! [tiles](Tile) from their [rack](Rack) onto the [board](Board), then either
//! [commits](TurnController::end_turn) them or [takes them back](TurnController::rollback).
//! A commit is accepted only when every [word](Word) it forms is in the [dictionary](Dictionary).
//! Players earn the points of the [letters](PlacedLetter) they place.
//!
//! ## What are the states of a turn?
//!
//! * `Staging`: The current player has zero or more [tiles](Tile) staged. Every turn starts and
//! rests here. Staged letters are visible on the [board snapshot](TurnController::board_snapshot)
//! but are not committed.
//! * `Committed`: [end_turn](TurnController::end_turn) returned a [summary](TurnSummary). The
//! letters are part of the [board](Board), the score and [rack](Rack) are updated, and the next
//! player is staging.
//! * `RolledBack`: [rollback](TurnController::rollback) returned every staged [tile](Tile) to its
//! rack slot. The same player is staging again.
//!
//! ## How is the game created?
//!
//! [TurnController::new] and [TurnController::new_with_rng] check the number of players and the
//! [tile distribution](TileDistribution), shuffle the [supply](TileSupply), and deal a
//! [rack](Rack) to each player in order. Player `0` moves first.
//!
//! ## How are tiles staged?
//!
//! [stage_tile](TurnController::stage_tile) removes the [tile](Tile) at some slot of the current
//! player's [rack](Rack) and stages it on an empty [coordinate](Coordinate). When the
//! [tile](Tile) is a [blank](Tile::Blank), the caller is asked once which letter it represents.
//! [stage_plays](TurnController::stage_plays) stages several [tiles](Tile) from [plays](Plays)
//! at once, or none of them.
//!
//! ## How is a turn validated?
//!
//! [validate] requires at least one staged letter, then (unless the [board](Board) is empty)
//! some staged letter next to an occupied cell as decided by the [AdjacencyRule], then every
//! [word](Word) through a staged letter to be in the [dictionary](Dictionary).
//! [Words](Word) are found by [extract_words].
//!
//! ## How are points calculated?
//!
//! The number of points earned by a turn is the sum of [points](Letter::points) of each letter
//! placed during that turn, counted once however many [words](Word) it belongs to. Letters
//! played from a [blank](Tile::Blank) are worth `0`. Letters committed in earlier turns add
//! nothing. Implemented by [score].
//!
//! ## How is the game viewed?
//!
//! [TurnController::view] returns an immutable [TurnView] of everything visible to all players.
//! [TurnController::rack_snapshot] shares private information for each individual player.
//!
//! ## How are players connected?
//!
//! The [Player] trait adapts a device to [actions](Action). [process_turn] loops over one
//! player's actions until their turn is committed, and [send_updates] sends the [view](TurnView)
//! to every player at once.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. The
//! [controller](TurnController) implements methods to get mutable references to its properties,
//! helper methods to add random data to specific properties, and methods to set properties for
//! common scenarios.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    missing_debug_implementations,
    unsafe_code
)]
#![warn(missing_docs, unused, single_use_lifetimes, unreachable_pub)]

pub use board::*;
pub use consts::*;
pub use controller::*;
pub use coordinate::*;
pub use dictionary::*;
pub use error::*;
pub use rack::*;
#[cfg(test)]
pub use random::*;
pub use runtime::*;
pub use scoring::*;
pub use supply::*;
pub use tile::*;
pub use types::*;
pub use validator::*;
pub use words::*;

mod board;
mod consts;
mod controller;
mod coordinate;
mod dictionary;
mod error;
mod rack;
#[cfg(test)]
mod random;
mod runtime;
mod scoring;
mod supply;
mod tile;
mod types;
mod validator;
mod words;
