//! Item types and related helpers.
//!
//! Items are the things a player can pick up or read. Each one sits in exactly one
//! place at a time: a room's contents or the player's inventory.

use crate::{Id, Location, WorldObject};

use log::info;
use shadow_data::{ItemDef, LocationRef};

/// Anything in `ShadowWorld` that can be carried or inspected.
///
/// `portable` items can be taken. Items with `text` can be read, either from the floor
/// or from the player's pack.
#[derive(Debug, Default, Clone)]
pub struct Item {
    /// The stable id of this item.
    pub id: Id,
    /// The display name of the item.
    pub name: String,
    /// A general description of the item.
    pub description: String,
    /// The current `Location` of the item.
    pub location: Location,
    /// Whether the item can be picked up.
    pub portable: bool,
    /// Any legible text on the item.
    pub text: Option<String>,
}

impl WorldObject for Item {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn location(&self) -> &Location {
        &self.location
    }
}

impl Item {
    /// Build a runtime item from its definition.
    pub fn from_def(def: &ItemDef) -> Item {
        let location = match &def.location {
            LocationRef::Inventory => Location::Inventory,
            LocationRef::Room(room_id) => Location::Room(room_id.clone()),
        };
        Item {
            id: def.id.clone(),
            name: def.name.clone(),
            description: def.desc.clone(),
            location,
            portable: def.portable,
            text: def.text.clone(),
        }
    }

    /// Returns true if the supplied name refers to this item, ignoring case.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// The text written on this item, if any.
    pub fn readable_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set location to the player's inventory.
    pub fn set_location_inventory(&mut self) {
        info!("{} ({}) moved to inventory", self.name, self.id);
        self.location = Location::Inventory;
    }
}

/// Anything that can hold items.
pub trait ItemHolder {
    fn add_item(&mut self, item_id: Id);
    fn remove_item(&mut self, item_id: &str);
    fn contains_item(&self, item_id: &str) -> bool;
}
