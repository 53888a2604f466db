//! WorldDef conversion helpers.
//!
//! Converts the `WorldDef` data model into runtime engine structs.

use anyhow::{Context, Result};

use shadow_data::{ExitDef, LocationRef, RoomDef, WorldDef};

use crate::item::{Item, ItemHolder};
use crate::player::Player;
use crate::room::{Door, Exit, Room};
use crate::spinners::default_spinners;
use crate::world::{Location, ShadowWorld};

/// Convert a `WorldDef` into a populated `ShadowWorld`.
///
/// # Errors
/// - if an item or the player refers to a room that does not exist
pub fn build_world_from_def(def: &WorldDef) -> Result<ShadowWorld> {
    let mut world = ShadowWorld::new_empty();
    world.title = def.game.title.clone();
    world.intro = def.game.intro.clone();
    world.spinners = default_spinners();

    for room_def in &def.rooms {
        let room = room_from_def(room_def);
        world.rooms.insert(room.id.clone(), room);
    }

    world.player = Player::from_def(&def.game.player);
    for item_def in &def.items {
        let item = Item::from_def(item_def);
        match &item_def.location {
            LocationRef::Room(room_id) => world
                .rooms
                .get_mut(room_id)
                .with_context(|| format!("placing item '{}' in unknown room '{room_id}'", item.id))?
                .add_item(item.id.clone()),
            LocationRef::Inventory => world.player.add_item(item.id.clone()),
        }
        world.items.insert(item.id.clone(), item);
    }

    let start = def.game.player.start_room.clone();
    world
        .rooms
        .get_mut(&start)
        .with_context(|| format!("player start room '{start}' not found"))?
        .visited = true;

    world.enemy_def.clone_from(&def.enemy);
    Ok(world)
}

fn room_from_def(def: &RoomDef) -> Room {
    let mut room = Room::new(&def.id, &def.name, &def.desc);
    room.location = Location::Nowhere;
    for exit_def in &def.exits {
        room.exits.insert(exit_def.direction.to_lowercase(), exit_from_def(exit_def));
    }
    room
}

fn exit_from_def(def: &ExitDef) -> Exit {
    match &def.lock {
        Some(lock) => Exit::with_door(&def.to, Door::from_def(lock)),
        None => Exit::new(&def.to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadow_data::{DamageRange, GameDef, ItemDef, LockDef, PlayerDef};

    fn def() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Test".into(),
                intro: "Hello".into(),
                player: PlayerDef {
                    name: "Tester".into(),
                    description: "Tests things.".into(),
                    start_room: "a".into(),
                    max_hp: 5,
                    damage: DamageRange::new(1, 2),
                },
            },
            rooms: vec![
                RoomDef {
                    id: "a".into(),
                    name: "A".into(),
                    desc: "Room A".into(),
                    exits: vec![ExitDef {
                        direction: "North".into(),
                        to: "b".into(),
                        lock: Some(LockDef {
                            key_item: "pin".into(),
                            password: "x".into(),
                            case_sensitive: false,
                        }),
                    }],
                },
                RoomDef {
                    id: "b".into(),
                    name: "B".into(),
                    desc: "Room B".into(),
                    exits: Vec::new(),
                },
            ],
            items: vec![ItemDef {
                id: "pin".into(),
                name: "pin".into(),
                desc: "A pin.".into(),
                portable: true,
                location: LocationRef::Inventory,
                text: None,
            }],
            enemy: None,
        }
    }

    #[test]
    fn builds_rooms_items_and_player() {
        let world = build_world_from_def(&def()).unwrap();
        assert_eq!(world.title, "Test");
        assert!(world.rooms["a"].visited);
        assert!(!world.rooms["b"].visited);
        assert!(world.rooms["a"].exit("north").is_some_and(|(_, exit)| exit.is_locked()));
        assert_eq!(world.player.inventory, vec!["pin".to_string()]);
        assert_eq!(world.player.health.max_hp(), 5);
    }

    #[test]
    fn unknown_item_room_is_an_error() {
        let mut def = def();
        def.items[0].location = LocationRef::Room("nowhere".into());
        assert!(build_world_from_def(&def).is_err());
    }
}
