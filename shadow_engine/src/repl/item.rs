//! `repl::item` module
//!
//! Handlers for reading items and working the door puzzle.

use crate::inventory::read_item;
use crate::puzzle::{UnlockOutcome, open_door, unlock_door};
use crate::repl::report;
use crate::{ShadowWorld, View, ViewItem};

/// Read an item that is held or in the room.
pub fn read_handler(world: &ShadowWorld, view: &mut View, thing: &str) {
    match read_item(world, thing) {
        Ok(read) => view.push(ViewItem::ItemText {
            name: read.name,
            text: read.text,
        }),
        Err(err) => report(view, &err),
    }
}

/// Try to unlock a door with a password.
pub fn unlock_handler(world: &mut ShadowWorld, view: &mut View, direction: Option<&str>, password: &str) {
    match unlock_door(world, direction, password) {
        Ok(UnlockOutcome::Unlocked) => {
            let way = world
                .player_room_ref()
                .ok()
                .and_then(|room| room.door_direction(direction))
                .unwrap_or_else(|| "onward".to_string());
            view.push(ViewItem::ActionSuccess(format!(
                "The door unlocks with a click! You can now go {way}."
            )));
        },
        Ok(UnlockOutcome::AlreadyUnlocked) => {
            view.push(ViewItem::ActionSuccess("The door is already unlocked.".to_string()));
        },
        Err(err) => report(view, &err),
    }
}

/// Try to open a door.
pub fn open_handler(world: &ShadowWorld, view: &mut View, direction: Option<&str>) {
    match open_door(world, direction) {
        Ok(way) => view.push(ViewItem::ActionSuccess(format!(
            "The door is already open. You can go {way}."
        ))),
        Err(err) => report(view, &err),
    }
}
