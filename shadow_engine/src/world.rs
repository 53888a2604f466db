//! Data structures representing the game world.
//!
//! This module defines [`ShadowWorld`] and related types used at runtime to
//! track the current state of the adventure.

use crate::SHADOW_VERSION;
use crate::combat::CombatState;
use crate::enemy::Enemy;
use crate::error::EngineError;
use crate::health::LivingEntity;
use crate::spinners::SpinnerType;
use crate::{Id, Item, Player, Room};

use gametools::Spinner;
use log::info;
use shadow_data::EnemyDef;

use std::collections::HashMap;
use variantly::Variantly;

/// Kinds of places where a `WorldObject` may be located.
/// Rooms *are* the locations, so their own location is always `Nowhere`.
#[derive(Debug, Default, Clone, Variantly, PartialEq, Eq)]
pub enum Location {
    Inventory,
    #[default]
    Nowhere,
    Room(Id),
}

/// Methods common to any object in the world.
pub trait WorldObject {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn location(&self) -> &Location;
}

/// Where the session stands after the last command.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum GameStatus {
    #[default]
    Continue,
    Won,
    Lost,
    Quit,
}
impl GameStatus {
    /// Won, lost and quit all end the session.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Continue)
    }
}

/// Complete state of the running game.
///
/// `ShadowWorld` owns every room and item, the player, and the enemy once it has been met.
/// It is built by the loader and then passed by reference into every engine call.
#[derive(Debug, Clone, Default)]
pub struct ShadowWorld {
    pub title: String,
    pub intro: String,
    pub rooms: HashMap<Id, Room>,
    pub items: HashMap<Id, Item>,
    pub player: Player,
    /// Blueprint for the enemy, consumed the first time its lair is entered.
    pub enemy_def: Option<EnemyDef>,
    pub enemy: Option<Enemy>,
    pub combat: CombatState,
    pub status: GameStatus,
    pub spinners: HashMap<SpinnerType, Spinner<String>>,
    pub turn_count: usize,
    pub version: String,
}
impl ShadowWorld {
    /// Create a new empty world with a default player.
    pub fn new_empty() -> ShadowWorld {
        let world = Self {
            version: SHADOW_VERSION.to_string(),
            ..Self::default()
        };
        info!("new, empty 'ShadowWorld' created");
        world
    }

    /// Returns a random line from the selected spinner type, or a supplied default.
    pub fn spin_spinner(&self, spin_type: SpinnerType, default: &'static str) -> String {
        self.spinners
            .get(&spin_type)
            .and_then(Spinner::spin)
            .unwrap_or_else(|| default.to_string())
    }

    /// Id of the room the player occupies.
    ///
    /// # Errors
    /// - if the player isn't in a room at all
    pub fn player_room_id(&self) -> Result<&Id, EngineError> {
        self.player
            .location
            .room_ref()
            .ok_or_else(|| EngineError::MissingRoom(format!("{:?}", self.player.location)))
    }

    /// Obtain a reference to the room the player occupies.
    ///
    /// # Errors
    /// - if player isn't in a Room or the Room's id is not found
    pub fn player_room_ref(&self) -> Result<&Room, EngineError> {
        let room_id = self.player_room_id()?;
        self.rooms
            .get(room_id)
            .ok_or_else(|| EngineError::MissingRoom(room_id.clone()))
    }

    /// Obtain a mutable reference to the room the player occupies.
    ///
    /// # Errors
    /// - if player is not in a room or room's id is not found
    pub fn player_room_mut(&mut self) -> Result<&mut Room, EngineError> {
        let room_id = self.player_room_id()?.clone();
        self.rooms.get_mut(&room_id).ok_or(EngineError::MissingRoom(room_id))
    }

    /// True while the player stands in the enemy's lair, the enemy lives, and blows are being traded.
    pub fn combat_active(&self) -> bool {
        self.combat == CombatState::PlayerTurn
            && self
                .enemy
                .as_ref()
                .is_some_and(|enemy| enemy.is_alive() && self.player.location.room_ref() == Some(&enemy.room))
    }

    /// Number of rooms the player has set foot in.
    pub fn rooms_visited(&self) -> usize {
        self.rooms.values().filter(|room| room.visited).count()
    }
}
