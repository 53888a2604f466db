//! `repl::system` module
//!
//! Handlers for commands about the game session itself.

use log::info;

use crate::loader::help::help_commands;
use crate::spinners::SpinnerType;
use crate::{GameStatus, ShadowWorld, View, ViewItem};

/// Show the command list.
pub fn help_handler(view: &mut View) {
    view.push(ViewItem::Help(help_commands()));
}

/// End the session and summarize it.
pub fn quit_handler(world: &mut ShadowWorld, view: &mut View) {
    info!("$$ {} quit after {} turns", world.player.name, world.turn_count);
    world.status = GameStatus::Quit;
    view.push(ViewItem::QuitSummary {
        message: world.spin_spinner(SpinnerType::QuitMsg, "Thanks for playing! Goodbye."),
        turns: world.turn_count,
        visited: world.rooms_visited(),
        total_rooms: world.rooms.len(),
    });
}
