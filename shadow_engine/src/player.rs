//! Player -- module for the player character
use crate::{
    DamageRange, Id, ItemHolder, Location, WorldObject,
    health::{HealthState, LivingEntity},
};

use shadow_data::PlayerDef;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub location: Location,
    /// Held item ids in acquisition order.
    pub inventory: Vec<Id>,
    pub health: HealthState,
    pub damage: DamageRange,
}
impl Default for Player {
    fn default() -> Player {
        Self {
            id: "player".into(),
            name: "The Wanderer".into(),
            description: "default".into(),
            location: Location::default(),
            inventory: Vec::new(),
            health: HealthState::new_at_max(20),
            damage: DamageRange::new(1, 6),
        }
    }
}
impl Player {
    /// Build the player from its definition, standing in the start room.
    pub fn from_def(def: &PlayerDef) -> Player {
        Player {
            id: "player".into(),
            name: def.name.clone(),
            description: def.description.clone(),
            location: Location::Room(def.start_room.clone()),
            inventory: Vec::new(),
            health: HealthState::new_at_max(def.max_hp),
            damage: def.damage,
        }
    }
}
impl WorldObject for Player {
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
impl LivingEntity for Player {
    fn health(&self) -> &HealthState {
        &self.health
    }

    fn health_mut(&mut self) -> &mut HealthState {
        &mut self.health
    }
}
impl ItemHolder for Player {
    fn add_item(&mut self, item_id: Id) {
        if !self.inventory.contains(&item_id) {
            self.inventory.push(item_id);
        }
    }

    fn remove_item(&mut self, item_id: &str) {
        self.inventory.retain(|id| id != item_id);
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }
}
