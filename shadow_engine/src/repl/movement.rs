//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change or describe player location

use crate::navigation::{describe_current_room, move_player};
use crate::repl::{push_encounter, report};
use crate::spinners::SpinnerType;
use crate::{ShadowWorld, View, ViewItem};

/// Move the player to a neighboring room, if the exit is open.
pub fn move_to_handler(world: &mut ShadowWorld, view: &mut View, direction: &str) {
    let travel = world.spin_spinner(SpinnerType::Movement, "You head");
    match move_player(world, direction) {
        Ok(moved) => {
            view.push(ViewItem::TransitionMessage(format!("{travel} {}...", moved.direction)));
            view.push(ViewItem::RoomDescription(moved.room));
            if let Some(encounter) = moved.encounter {
                push_encounter(view, encounter);
            }
        },
        Err(err) => report(view, &err),
    }
}

/// Describe the current room again.
pub fn look_handler(world: &ShadowWorld, view: &mut View) {
    match describe_current_room(world) {
        Ok(room) => view.push(ViewItem::RoomDescription(room)),
        Err(err) => report(view, &err),
    }
}
