use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use shadow_data::{DamageRange, GameDef, PlayerDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: "Intro".into(),
///         player: PlayerDef {
///             name: "Player".into(),
///             description: "A hero".into(),
///             start_room: "start".into(),
///             max_hp: 10,
///             damage: DamageRange::new(1, 6),
///         },
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         name: "Start".into(),
///         desc: "A room.".into(),
///         exits: Vec::new(),
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();

    track_ids("room", world.rooms.iter().map(|r| r.id.as_str()), &mut rooms, &mut errors);
    track_ids("item", world.items.iter().map(|i| i.id.as_str()), &mut items, &mut errors);

    let player = &world.game.player;
    if player.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game player start room missing".to_string(),
        });
    } else {
        check_ref(
            "room",
            &player.start_room,
            &rooms,
            "game player start room".to_string(),
            &mut errors,
        );
    }
    validate_combatant("player", player.max_hp, player.damage, &mut errors);

    for room in &world.rooms {
        let mut directions = HashSet::new();
        for exit in &room.exits {
            if !directions.insert(exit.direction.to_lowercase()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has two '{}' exits", room.id, exit.direction),
                });
            }
            check_ref(
                "room",
                &exit.to,
                &rooms,
                format!("exit '{}' from room '{}'", exit.direction, room.id),
                &mut errors,
            );
            if let Some(lock) = &exit.lock {
                check_ref(
                    "item",
                    &lock.key_item,
                    &items,
                    format!("key for '{}' door in room '{}'", exit.direction, room.id),
                    &mut errors,
                );
                if lock.password.trim().is_empty() {
                    errors.push(ValidationError::InvalidValue {
                        context: format!("empty password on '{}' door in room '{}'", exit.direction, room.id),
                    });
                }
            }
        }
    }

    for item in &world.items {
        if let LocationRef::Room(room_id) = &item.location {
            check_ref("room", room_id, &rooms, format!("location of item '{}'", item.id), &mut errors);
        }
    }

    if let Some(enemy) = &world.enemy {
        check_ref("room", &enemy.room, &rooms, format!("lair of enemy '{}'", enemy.id), &mut errors);
        if enemy.room == player.start_room {
            errors.push(ValidationError::InvalidValue {
                context: format!("enemy '{}' cannot start in the player's room", enemy.id),
            });
        }
        validate_combatant("enemy", enemy.max_hp, enemy.damage, &mut errors);
    }

    errors
}

fn validate_combatant(kind: &str, max_hp: u32, damage: DamageRange, errors: &mut Vec<ValidationError>) {
    if max_hp == 0 {
        errors.push(ValidationError::InvalidValue {
            context: format!("{kind} max hp must be positive"),
        });
    }
    if !damage.is_valid() {
        errors.push(ValidationError::InvalidValue {
            context: format!("{kind} damage range {} is inverted", damage),
        });
    }
    if damage.max == 0 {
        errors.push(ValidationError::InvalidValue {
            context: format!("{kind} can never deal damage ({damage})"),
        });
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    seen: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !seen.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
