//! Puzzle Module
//!
//! The lock-and-password puzzle: a door opens only for a player who holds its key and
//! speaks its password. Unlocking is permanent.

use log::{info, warn};

use crate::ItemHolder;
use crate::error::EngineError;
use crate::room::Room;
use crate::world::ShadowWorld;

/// Result of a successful `unlock_door`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    Unlocked,
    AlreadyUnlocked,
}

fn resolve_door(room: &Room, direction: Option<&str>) -> Result<String, EngineError> {
    room.door_direction(direction).ok_or(EngineError::NoDoor)
}

/// Attempt to unlock a door in the current room.
///
/// With no direction the first door in the room is used.
///
/// # Errors
/// - `NoDoor` if there is no matching door here
/// - `MissingKey` if the player lacks the door's key (checked before the password)
/// - `WrongPassword` if the password does not match
pub fn unlock_door(
    world: &mut ShadowWorld,
    direction: Option<&str>,
    password: &str,
) -> Result<UnlockOutcome, EngineError> {
    let room = world.player_room_ref()?;
    let door_dir = resolve_door(room, direction)?;
    let room_id = room.id.clone();
    let Some(door) = room.exits.get(&door_dir).and_then(|exit| exit.door.as_ref()) else {
        return Err(EngineError::NoDoor);
    };
    if !door.is_locked() {
        info!("door {door_dir} of '{room_id}' already unlocked");
        return Ok(UnlockOutcome::AlreadyUnlocked);
    }
    if !world.player.contains_item(&door.key_item) {
        warn!("unlock attempt on {door_dir} door of '{room_id}' without key '{}'", door.key_item);
        return Err(EngineError::MissingKey);
    }
    if !door.accepts(password) {
        warn!("wrong password for {door_dir} door of '{room_id}'");
        return Err(EngineError::WrongPassword);
    }

    if let Some(door) = world
        .player_room_mut()?
        .exits
        .get_mut(&door_dir)
        .and_then(|exit| exit.door.as_mut())
    {
        door.unlock();
    }
    info!("{} unlocked the {door_dir} door of '{room_id}'", world.player.name);
    Ok(UnlockOutcome::Unlocked)
}

/// Try to open a door in the current room. Returns the door's direction.
///
/// # Errors
/// - `NoDoor` if there is no matching door here
/// - `StillLocked` if the door has not been unlocked yet
pub fn open_door(world: &ShadowWorld, direction: Option<&str>) -> Result<String, EngineError> {
    let room = world.player_room_ref()?;
    let door_dir = resolve_door(room, direction)?;
    if room.exits.get(&door_dir).is_some_and(crate::room::Exit::is_locked) {
        return Err(EngineError::StillLocked);
    }
    Ok(door_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{Door, Exit, PasswordPolicy};
    use crate::Location;

    fn gated_world(policy: PasswordPolicy) -> ShadowWorld {
        let mut world = ShadowWorld::new_empty();
        let mut cell = Room::new("cell", "Cell", "Bare walls.");
        cell.exits
            .insert("north".into(), Exit::with_door("yard", Door::locked("key", "SHADOW", policy)));
        cell.exits.insert("south".into(), Exit::new("pit"));
        world.rooms.insert("cell".into(), cell);
        world.rooms.insert("yard".into(), Room::new("yard", "Yard", "Open sky."));
        world.player.location = Location::Room("cell".into());
        world
    }

    fn door_locked(world: &ShadowWorld) -> bool {
        world.rooms["cell"].exits["north"].is_locked()
    }

    #[test]
    fn missing_key_wins_over_password() {
        let mut world = gated_world(PasswordPolicy::default());
        assert_eq!(unlock_door(&mut world, None, "SHADOW"), Err(EngineError::MissingKey));
        assert_eq!(unlock_door(&mut world, None, "nope"), Err(EngineError::MissingKey));
        assert!(door_locked(&world));
    }

    #[test]
    fn wrong_password_keeps_door_locked() {
        let mut world = gated_world(PasswordPolicy::default());
        world.player.add_item("key".into());
        assert_eq!(unlock_door(&mut world, None, "WRONGWORD"), Err(EngineError::WrongPassword));
        assert!(door_locked(&world));
        assert_eq!(open_door(&world, None), Err(EngineError::StillLocked));
    }

    #[test]
    fn unlock_is_permanent_and_repeatable() {
        let mut world = gated_world(PasswordPolicy::default());
        world.player.add_item("key".into());
        assert_eq!(unlock_door(&mut world, Some("north"), "shadow"), Ok(UnlockOutcome::Unlocked));
        assert!(!door_locked(&world));
        assert_eq!(unlock_door(&mut world, None, "SHADOW"), Ok(UnlockOutcome::AlreadyUnlocked));
        assert_eq!(open_door(&world, None), Ok("north".to_string()));
    }

    #[test]
    fn exact_policy_rejects_other_casing() {
        let mut world = gated_world(PasswordPolicy::Exact);
        world.player.add_item("key".into());
        assert_eq!(unlock_door(&mut world, None, "shadow"), Err(EngineError::WrongPassword));
        assert_eq!(unlock_door(&mut world, None, "SHADOW"), Ok(UnlockOutcome::Unlocked));
    }

    #[test]
    fn doorless_exits_are_not_doors() {
        let mut world = gated_world(PasswordPolicy::default());
        assert_eq!(unlock_door(&mut world, Some("south"), "x"), Err(EngineError::NoDoor));
        assert_eq!(open_door(&world, Some("west")), Err(EngineError::NoDoor));
        world.player.location = Location::Room("yard".into());
        assert_eq!(open_door(&world, None), Err(EngineError::NoDoor));
    }
}
