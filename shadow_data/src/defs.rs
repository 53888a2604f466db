use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level world data handed to the engine at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    pub enemy: Option<EnemyDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameDef {
    pub title: String,
    pub intro: String,
    pub player: PlayerDef,
}

/// Starting stats and location of the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    pub description: String,
    pub start_room: Id,
    pub max_hp: u32,
    pub damage: DamageRange,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            start_room: String::new(),
            max_hp: 1,
            damage: DamageRange::default(),
        }
    }
}

/// Inclusive range of hit points a single blow can remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// True if `min <= max`.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

impl Default for DamageRange {
    fn default() -> Self {
        Self { min: 1, max: 1 }
    }
}

impl fmt::Display for DamageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
}

/// Directed connection to a neighboring room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: Id,
    pub lock: Option<LockDef>,
}

/// A door that starts locked and opens for the right key and password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockDef {
    pub key_item: Id,
    pub password: String,
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Item definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default = "default_portable")]
    pub portable: bool,
    pub location: LocationRef,
    pub text: Option<String>,
}

fn default_portable() -> bool {
    true
}

/// Authoring-time reference to an item's starting location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationRef {
    Inventory,
    Room(Id),
}

/// The single hostile creature guarding one room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    pub room: Id,
    pub max_hp: u32,
    pub damage: DamageRange,
}
