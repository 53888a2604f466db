//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. [`execute`] runs a single line of input
//! against the [`ShadowWorld`]; [`run_repl`] wraps it with terminal input and output.
//! The handlers in the submodules turn engine results and errors into `ViewItem`s.

pub mod combat;
mod input;
pub mod inventory;
pub mod item;
pub mod movement;
pub mod system;

pub use combat::*;
pub use inventory::*;
pub use item::*;
pub use movement::*;
pub use system::*;

use anyhow::Result;
use log::{error, info};

use crate::command::{Command, parse_command};
use crate::dice::DamageRoller;
use crate::error::EngineError;
use crate::style::GameStyle;
use crate::world::{GameStatus, ShadowWorld};
use crate::{View, ViewItem};

use input::{InputEvent, InputManager};

/// Push an engine error to the view. Internal faults are also logged.
pub(crate) fn report(view: &mut View, err: &EngineError) {
    if err.is_internal() {
        error!("engine fault: {err}");
    } else {
        info!("command rejected: {err}");
    }
    view.push(ViewItem::Error(err.to_string()));
}

/// Run one line of player input against the world.
///
/// Results and errors land in `view`; the returned status tells the caller whether the
/// session goes on. Once the game has ended every call reports the same terminal status.
pub fn execute<R: DamageRoller + ?Sized>(
    world: &mut ShadowWorld,
    roller: &mut R,
    view: &mut View,
    input: &str,
) -> GameStatus {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    if world.status.is_terminal() {
        view.push(ViewItem::EngineMessage("The game is over.".to_string()));
        return world.status;
    }
    if input.trim().is_empty() {
        return world.status;
    }

    let command = parse_command(input);
    info!("command: {command:?}");
    if command.is_unknown() {
        report(view, &EngineError::Parse);
        return world.status;
    }
    if world.combat_active() && !command.allowed_in_combat() {
        report(view, &EngineError::CombatInProgress);
        return world.status;
    }

    world.turn_count += 1;
    match &command {
        MoveTo(direction) => move_to_handler(world, view, direction),
        Look => look_handler(world, view),
        Take(thing) => take_handler(world, view, thing),
        Read(thing) => read_handler(world, view, thing),
        Inventory => inv_handler(world, view),
        Unlock { direction, password } => unlock_handler(world, view, direction.as_deref(), password),
        Open { direction } => open_handler(world, view, direction.as_deref()),
        Attack => attack_handler(world, roller, view),
        Help => help_handler(view),
        Quit => quit_handler(world, view),
        Unknown => report(view, &EngineError::Parse),
    }
    world.status
}

/// Run the main read–eval–print loop until the game ends.
///
/// # Errors
/// Reserved for unrecoverable terminal failures; bad input never ends the loop.
pub fn run_repl<R: DamageRoller + ?Sized>(world: &mut ShadowWorld, roller: &mut R) -> Result<GameStatus> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();
    let mut current_turn = usize::MAX;

    loop {
        if world.turn_count != current_turn {
            current_turn = world.turn_count;
            info!("================> BEGIN TURN {} <================", current_turn + 1);
        }

        let prompt = format!(
            "\n[Turn: {}|HP: {}/{}]>> ",
            world.turn_count + 1,
            world.player.health.current_hp(),
            world.player.health.max_hp()
        )
        .prompt_style()
        .to_string();

        let input = match input_manager.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => "quit".to_string(),
            Ok(InputEvent::Interrupted) => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
            Err(err) => {
                error!("failed to read input: {err}");
                view.push(ViewItem::Error("Failed to read input. Try again.".to_string()));
                view.flush();
                continue;
            },
        };

        let status = execute(world, roller, &mut view, &input);
        view.flush();
        if status.is_terminal() {
            info!("game ended after {} turns: {status:?}", world.turn_count);
            return Ok(status);
        }
    }
}
