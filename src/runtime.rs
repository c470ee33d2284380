use crate::{Coordinate, Plays, Rack, TurnError, TurnView};
use async_trait::async_trait;
use std::collections::HashSet;
pub use turn_runtime::*;

mod turn_runtime;

/// One request from the current player.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Action {
    /// Move the [tile](crate::Tile) at `slot` of the rack to `coordinate`.
    /// Calls [TurnController::stage_tile](crate::TurnController::stage_tile).
    Stage {
        /// The rack slot of the [tile](crate::Tile) to stage.
        slot: usize,
        /// The empty board cell to stage it on.
        coordinate: Coordinate,
    },
    /// Move several [tiles](crate::Tile) at once.
    /// Calls [TurnController::stage_plays](crate::TurnController::stage_plays).
    Play(Plays),
    /// Calls [TurnController::end_turn](crate::TurnController::end_turn).
    EndTurn,
    /// Calls [TurnController::rollback](crate::TurnController::rollback).
    Rollback,
}

/// Connects a player's device to the game.
///
/// `get_action`, `resolve_blank` and `update_errors` block execution until getting input or
/// updating output. `update_view` may execute in parallel with updates to other players.
///
/// # Errors
///
/// The implementor of [`Player`] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated invalid inputs. When a method
/// call fails, the runtime is stopped, and an error is returned and propagated out of the runtime
/// and back to the calling client code.
#[async_trait]
pub trait Player<E> {
    /// Gets the next [`Action`] from the current player.
    fn get_action(&self) -> Result<Action, E>;

    /// Asks the current player which letter a [blank](crate::Tile::Blank) represents.
    /// [None] drops the attempt to stage it.
    fn resolve_blank(&self) -> Result<Option<String>, E>;

    /// When an [`Action`] fails, updates the current player with the state of the game,
    /// their rack, their action, and the reasons why it could not be executed.
    fn update_errors<'a>(
        &self,
        view: &'a TurnView<'a>,
        rack: &'a Rack,
        action: Action,
        errors: HashSet<TurnError>,
    ) -> Result<(), E>;

    /// Updates each player with the state of the game and their rack.
    async fn update_view<'a>(&self, view: &'a TurnView<'a>, rack: &'a Rack) -> Result<(), E>;
}
