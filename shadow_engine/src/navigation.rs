//! Navigation Module
//!
//! Moving the player along the room graph.

use log::{info, warn};

use crate::combat::{self, Encounter};
use crate::error::EngineError;
use crate::room::RoomSnapshot;
use crate::world::{Location, ShadowWorld};

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Direction as it is named in the room the player left.
    pub direction: String,
    pub room: RoomSnapshot,
    /// Set when stepping into the room started a fight.
    pub encounter: Option<Encounter>,
}

/// Move the player one step in `direction`.
///
/// # Errors
/// - `NoSuchExit` if the current room has no exit that way
/// - `Locked` if a locked door bars the exit
/// - `MissingRoom` if the exit leads to a room that does not exist
pub fn move_player(world: &mut ShadowWorld, direction: &str) -> Result<MoveReport, EngineError> {
    let current = world.player_room_ref()?;
    let Some((exit_dir, exit)) = current.exit(direction) else {
        return Err(EngineError::NoSuchExit(direction.trim().to_string()));
    };
    if exit.is_locked() {
        warn!("{} blocked by locked door leading {exit_dir}", world.player.name);
        return Err(EngineError::Locked);
    }
    let exit_dir = exit_dir.to_string();
    let destination = exit.to.clone();
    if !world.rooms.contains_key(&destination) {
        return Err(EngineError::MissingRoom(destination));
    }

    let from = current.id.clone();
    world.player.location = Location::Room(destination.clone());
    world.player_room_mut()?.visited = true;
    info!("{} moved {exit_dir} from '{from}' to '{destination}'", world.player.name);

    let room = world.player_room_ref()?.snapshot(&world.items);
    let encounter = combat::begin_encounter(world);
    Ok(MoveReport {
        direction: exit_dir,
        room,
        encounter,
    })
}

/// Describe the player's current room without changing anything.
///
/// # Errors
/// - `MissingRoom` if the player is not in a known room
pub fn describe_current_room(world: &ShadowWorld) -> Result<RoomSnapshot, EngineError> {
    Ok(world.player_room_ref()?.snapshot(&world.items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{Door, Exit, PasswordPolicy};
    use crate::{DamageRange, Room};
    use shadow_data::EnemyDef;

    fn two_rooms() -> ShadowWorld {
        let mut world = ShadowWorld::new_empty();
        let mut hall = Room::new("hall", "Hall", "A hall.");
        hall.visited = true;
        hall.exits.insert("north".into(), Exit::new("attic"));
        hall.exits.insert(
            "east".into(),
            Exit::with_door("vault", Door::locked("key", "OPEN", PasswordPolicy::default())),
        );
        let mut attic = Room::new("attic", "Attic", "Dusty.");
        attic.exits.insert("south".into(), Exit::new("hall"));
        world.rooms.insert("hall".into(), hall);
        world.rooms.insert("attic".into(), attic);
        world.rooms.insert("vault".into(), Room::new("vault", "Vault", "Gold."));
        world.player.location = Location::Room("hall".into());
        world
    }

    #[test]
    fn move_marks_room_visited_once() {
        let mut world = two_rooms();
        let report = move_player(&mut world, "NORTH").unwrap();
        assert_eq!(report.direction, "north");
        assert_eq!(report.room.name, "Attic");
        assert!(report.encounter.is_none());

        move_player(&mut world, "south").unwrap();
        move_player(&mut world, "north").unwrap();
        assert_eq!(world.rooms_visited(), 2);
    }

    #[test]
    fn missing_exit_leaves_player_in_place() {
        let mut world = two_rooms();
        let err = move_player(&mut world, "west").unwrap_err();
        assert_eq!(err, EngineError::NoSuchExit("west".into()));
        assert_eq!(world.player.location, Location::Room("hall".into()));
    }

    #[test]
    fn padded_direction_resolves_to_room_exit_name() {
        let mut world = two_rooms();
        let report = move_player(&mut world, "  North ").unwrap();
        assert_eq!(report.direction, "north");
        assert_eq!(world.player.location, Location::Room("attic".into()));
    }

    #[test]
    fn locked_exit_cannot_be_traversed() {
        let mut world = two_rooms();
        assert_eq!(move_player(&mut world, "east"), Err(EngineError::Locked));
        assert_eq!(world.player.location, Location::Room("hall".into()));
    }

    #[test]
    fn dangling_exit_reports_missing_room() {
        let mut world = two_rooms();
        world
            .rooms
            .get_mut("hall")
            .unwrap()
            .exits
            .insert("down".into(), Exit::new("cellar"));
        assert_eq!(
            move_player(&mut world, "down"),
            Err(EngineError::MissingRoom("cellar".into()))
        );
        assert_eq!(world.player.location, Location::Room("hall".into()));
    }

    #[test]
    fn entering_lair_starts_combat() {
        let mut world = two_rooms();
        world.enemy_def = Some(EnemyDef {
            id: "rat".into(),
            name: "Giant Rat".into(),
            desc: "Big.".into(),
            room: "attic".into(),
            max_hp: 4,
            damage: DamageRange::new(1, 2),
        });
        let report = move_player(&mut world, "north").unwrap();
        assert!(report.encounter.is_some_and(|encounter| encounter.enemy_name == "Giant Rat"));
        assert!(world.combat_active());
    }

    #[test]
    fn look_has_no_side_effects() {
        let world = two_rooms();
        let snapshot = describe_current_room(&world).unwrap();
        assert_eq!(snapshot.name, "Hall");
        assert_eq!(world.rooms_visited(), 1);
    }
}
