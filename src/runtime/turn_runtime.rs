use crate::runtime::{Action, Player};
use crate::{Dictionary, TurnController, TurnSummary};
use futures::future;
use itertools::Itertools;
use map_macro::hash_set;

/// It repeatedly asks the current player for an [`Action`] and executes it. Whenever an action
/// fails, it tells the player about the errors and asks again. Stops asking once the turn is
/// committed.
///
/// Calls [`Player::get_action`] for an input and [`Player::resolve_blank`] whenever a
/// [blank](crate::Tile::Blank) is staged. If the input is invalid, calls
/// [`Player::update_errors`].
///
/// # Arguments
///
/// * `players`: A slice of players, one for each rack.
/// * `controller`: The current state of the game.
///
/// # Errors
///
/// When the current player fails to send input or receive an error update.
///
/// # Returns
///
/// What the turn committed.
///
/// # Panics
///
/// When there are fewer `players` than racks.
pub fn process_turn<P, E, D>(
    players: &[P],
    controller: &mut TurnController<D>,
) -> Result<TurnSummary, E>
where
    P: Player<E>,
    D: Dictionary,
{
    let current_player = controller.current_player_id().index();
    let player = &players[current_player];

    loop {
        let action = player.get_action()?;
        let mut failed = None;
        let mut resolver = || match player.resolve_blank() {
            Ok(answer) => answer,
            Err(error) => {
                failed = Some(error);
                None
            }
        };

        let result = match &action {
            Action::Stage { slot, coordinate } => controller
                .stage_tile(*slot, *coordinate, resolver)
                .map(drop)
                .map_err(|error| hash_set! { error }),
            Action::Play(plays) => controller.stage_plays(plays, &mut resolver).map(drop),
            Action::EndTurn => match controller.end_turn() {
                Ok(summary) => return Ok(summary),
                Err(error) => Err(hash_set! { error }),
            },
            Action::Rollback => {
                controller.rollback();
                Ok(())
            }
        };
        if let Some(error) = failed {
            return Err(error);
        }

        if let Err(errors) = result {
            // cannot use map_err since E needs to be propagated here
            player.update_errors(
                &controller.view(),
                &controller.racks()[current_player],
                action,
                errors,
            )?;
        }
    }
}

/// Asynchronously sends the current state of the game to [`Player`]s.
///
/// # Arguments
///
/// * `players`: A slice of [`Player`]s, one for each rack.
/// * `controller`: The current state of the game.
///
/// # Errors
///
/// Accumulates all errors from [`Player::update_view`] into a vector.
pub async fn send_updates<P, E, D>(
    players: &[P],
    controller: &TurnController<D>,
) -> Result<(), Vec<E>>
where
    P: Player<E>,
{
    let view = controller.view();
    let update_tasks = players
        .iter()
        .zip(controller.racks())
        .map(|(player, rack)| player.update_view(&view, rack));

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}
