//! Enemy Module
//!
//! The single hostile creature of the dungeon. It is spawned from its definition the
//! first time the player walks into its lair and never comes back once defeated.

use log::info;
use shadow_data::EnemyDef;

use crate::{
    DamageRange, Id, Location, WorldObject,
    health::{HealthState, LivingEntity},
};

/// Where the enemy stands in its short life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, variantly::Variantly)]
pub enum EnemyState {
    Lurking,
    Engaged,
    Defeated,
}

/// A hostile character bound to one room.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub location: Location,
    /// Lair the enemy guards.
    pub room: Id,
    pub health: HealthState,
    pub damage: DamageRange,
    pub state: EnemyState,
}
impl Enemy {
    /// Spawn the enemy from its definition, at full health and not yet aware of the player.
    pub fn spawn(def: &EnemyDef) -> Enemy {
        info!("spawning enemy '{}' in '{}' ({} hp)", def.name, def.room, def.max_hp);
        Enemy {
            id: def.id.clone(),
            name: def.name.clone(),
            description: def.desc.clone(),
            location: Location::Room(def.room.clone()),
            room: def.room.clone(),
            health: HealthState::new_at_max(def.max_hp),
            damage: def.damage,
            state: EnemyState::Lurking,
        }
    }

    /// The enemy notices the player and the fight starts.
    pub fn engage(&mut self) {
        if self.state.is_lurking() {
            self.state = EnemyState::Engaged;
        }
    }

    /// Mark the enemy as beaten for the rest of the session.
    pub fn defeat(&mut self) {
        info!("enemy '{}' defeated", self.name);
        self.state = EnemyState::Defeated;
        self.location = Location::Nowhere;
    }
}
impl WorldObject for Enemy {
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
impl LivingEntity for Enemy {
    fn health(&self) -> &HealthState {
        &self.health
    }

    fn health_mut(&mut self) -> &mut HealthState {
        &mut self.health
    }
}
