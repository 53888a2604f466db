//! Health Module
//!
//! Hit point bookkeeping for the player and the enemy.

use crate::WorldObject;

/// Current and maximum hit points of a living entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthState {
    max_hp: u32,
    current_hp: u32,
}
impl HealthState {
    /// Create a clean `HealthState` with specified maximum health
    pub fn new_at_max(max_hp: u32) -> HealthState {
        HealthState {
            max_hp,
            current_hp: max_hp,
        }
    }

    /// Get the maximum HP for this entity
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Get the current HP for this entity
    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Return whether this entity is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.current_hp > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Do damage to health. Saturates at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }
}

/// Abilities common to game entities that are alive
pub trait LivingEntity: WorldObject {
    fn health(&self) -> &HealthState;
    fn health_mut(&mut self) -> &mut HealthState;

    fn max_hp(&self) -> u32 {
        self.health().max_hp()
    }
    fn current_hp(&self) -> u32 {
        self.health().current_hp()
    }
    fn damage(&mut self, amount: u32) {
        self.health_mut().damage(amount);
    }
    fn life_state(&self) -> LifeState {
        self.health().life_state()
    }
    fn is_alive(&self) -> bool {
        self.life_state() == LifeState::Alive
    }
}

/// Possible life states for living entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_saturates_at_zero() {
        let mut state = HealthState::new_at_max(3);
        state.damage(4);
        assert_eq!(state.current_hp(), 0);
        assert_eq!(state.life_state(), LifeState::Dead);
    }

    #[test]
    fn lethal_damage_twice_stays_at_zero() {
        let mut state = HealthState::new_at_max(5);
        state.damage(u32::MAX);
        state.damage(u32::MAX);
        assert_eq!(state.current_hp(), 0);
        assert_eq!(state.max_hp(), 5);
    }

    #[test]
    fn partial_damage_keeps_entity_alive() {
        let mut state = HealthState::new_at_max(20);
        state.damage(17);
        assert_eq!(state.current_hp(), 3);
        assert_eq!(state.life_state(), LifeState::Alive);
    }

    #[test]
    fn zero_max_starts_dead() {
        assert_eq!(HealthState::new_at_max(0).life_state(), LifeState::Dead);
    }
}
