//! Inventory Module
//!
//! Picking things up, reading them, and listing what the player carries.

use log::info;

use crate::error::EngineError;
use crate::world::ShadowWorld;
use crate::{Id, ItemHolder};

/// Text revealed by reading an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadText {
    pub name: String,
    pub text: String,
}

/// Find an item in the player's current room by name.
fn room_item_id(world: &ShadowWorld, name: &str) -> Result<Option<Id>, EngineError> {
    let room = world.player_room_ref()?;
    Ok(room
        .contents
        .iter()
        .find(|id| world.items.get(*id).is_some_and(|item| item.answers_to(name)))
        .cloned())
}

/// Find an item in the player's inventory by name.
fn held_item_id(world: &ShadowWorld, name: &str) -> Option<Id> {
    world
        .player
        .inventory
        .iter()
        .find(|id| world.items.get(*id).is_some_and(|item| item.answers_to(name)))
        .cloned()
}

/// Move a portable item from the current room into the player's inventory.
///
/// Returns the item's display name.
///
/// # Errors
/// - `ItemNotFound` if no item by that name lies in the room
/// - `NotPortable` if the item is fixed in place
pub fn take_item(world: &mut ShadowWorld, name: &str) -> Result<String, EngineError> {
    let name = name.trim();
    let item_id = room_item_id(world, name)?.ok_or_else(|| EngineError::ItemNotFound(name.to_string()))?;
    let item = world
        .items
        .get_mut(&item_id)
        .ok_or_else(|| EngineError::ItemNotFound(name.to_string()))?;
    if !item.portable {
        return Err(EngineError::NotPortable(item.name.clone()));
    }
    item.set_location_inventory();
    let item_name = item.name.clone();

    world.player_room_mut()?.remove_item(&item_id);
    world.player.add_item(item_id);
    info!("{} took {item_name}", world.player.name);
    Ok(item_name)
}

/// Read an item that is either held or lying in the current room.
///
/// # Errors
/// - `ItemNotFound` if the item is neither held nor present
/// - `NotReadable` if it carries no text
pub fn read_item(world: &ShadowWorld, name: &str) -> Result<ReadText, EngineError> {
    let name = name.trim();
    let item_id = match held_item_id(world, name) {
        Some(id) => id,
        None => room_item_id(world, name)?.ok_or_else(|| EngineError::ItemNotFound(name.to_string()))?,
    };
    let item = world
        .items
        .get(&item_id)
        .ok_or_else(|| EngineError::ItemNotFound(name.to_string()))?;
    let Some(text) = item.readable_text() else {
        return Err(EngineError::NotReadable(item.name.clone()));
    };
    info!("{} read {}", world.player.name, item.name);
    Ok(ReadText {
        name: item.name.clone(),
        text: text.to_string(),
    })
}

/// Names of the items the player holds, in the order they were picked up.
pub fn inventory_names(world: &ShadowWorld) -> Vec<String> {
    world
        .player
        .inventory
        .iter()
        .filter_map(|id| world.items.get(id).map(|item| item.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, Location, Room};

    fn stocked_room() -> ShadowWorld {
        let mut world = ShadowWorld::new_empty();
        let mut room = Room::new("hall", "Hall", "A hall.");
        for (id, portable, text) in [
            ("key", true, None),
            ("note", false, Some("The password is: OPEN")),
            ("lamp", true, None),
        ] {
            world.items.insert(
                id.into(),
                Item {
                    id: id.into(),
                    name: id.into(),
                    description: format!("a {id}"),
                    location: Location::Room("hall".into()),
                    portable,
                    text: text.map(String::from),
                },
            );
            room.add_item(id.into());
        }
        world.rooms.insert("hall".into(), room);
        world.player.location = Location::Room("hall".into());
        world
    }

    #[test]
    fn take_moves_item_atomically() {
        let mut world = stocked_room();
        assert_eq!(take_item(&mut world, "KEY").unwrap(), "key");
        assert!(!world.rooms["hall"].contains_item("key"));
        assert!(world.player.contains_item("key"));
        assert_eq!(world.items["key"].location, Location::Inventory);
    }

    #[test]
    fn second_take_fails() {
        let mut world = stocked_room();
        take_item(&mut world, "key").unwrap();
        assert_eq!(
            take_item(&mut world, "key"),
            Err(EngineError::ItemNotFound("key".into()))
        );
        assert_eq!(world.player.inventory.len(), 1);
    }

    #[test]
    fn fixed_items_stay_put() {
        let mut world = stocked_room();
        assert_eq!(
            take_item(&mut world, "note"),
            Err(EngineError::NotPortable("note".into()))
        );
        assert!(world.rooms["hall"].contains_item("note"));
        assert!(world.player.inventory.is_empty());
    }

    #[test]
    fn inventory_keeps_acquisition_order() {
        let mut world = stocked_room();
        assert!(inventory_names(&world).is_empty());
        take_item(&mut world, "lamp").unwrap();
        take_item(&mut world, "key").unwrap();
        assert_eq!(inventory_names(&world), vec!["lamp".to_string(), "key".to_string()]);
    }

    #[test]
    fn reading_is_idempotent_and_works_from_floor() {
        let world = stocked_room();
        let first = read_item(&world, "note").unwrap();
        let second = read_item(&world, "Note").unwrap();
        assert_eq!(first, second);
        assert!(first.text.contains("OPEN"));
    }

    #[test]
    fn read_errors() {
        let mut world = stocked_room();
        take_item(&mut world, "key").unwrap();
        assert_eq!(read_item(&world, "key"), Err(EngineError::NotReadable("key".into())));
        assert_eq!(
            read_item(&world, "scroll"),
            Err(EngineError::ItemNotFound("scroll".into()))
        );
    }
}
