//! `repl::inventory` module
//!
//! Handlers for picking items up and listing what the player carries.

use crate::inventory::{inventory_names, take_item};
use crate::repl::report;
use crate::{ShadowWorld, View, ViewItem};

/// Pick up an item from the current room.
pub fn take_handler(world: &mut ShadowWorld, view: &mut View, thing: &str) {
    match take_item(world, thing) {
        Ok(name) => view.push(ViewItem::ActionSuccess(format!(
            "You pick up the {name} and add it to your inventory."
        ))),
        Err(err) => report(view, &err),
    }
}

/// Show the player's inventory.
pub fn inv_handler(world: &ShadowWorld, view: &mut View) {
    view.push(ViewItem::Inventory(inventory_names(world)));
}
