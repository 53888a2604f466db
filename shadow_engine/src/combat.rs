//! Combat Module
//!
//! Turn-based fight between the player and the dungeon's enemy. Each `attack` is one
//! exchange: the player strikes, and if the enemy survives it strikes back. A fight ends
//! in exactly one terminal outcome, after which the world reports `Won` or `Lost`.

use log::{info, warn};

use crate::dice::DamageRoller;
use crate::enemy::Enemy;
use crate::error::EngineError;
use crate::health::LivingEntity;
use crate::world::{GameStatus, ShadowWorld, WorldObject};

/// How a finished fight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

/// Phase of the encounter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, variantly::Variantly)]
pub enum CombatState {
    #[default]
    Inactive,
    PlayerTurn,
    Resolved(CombatOutcome),
}

/// One blow landed by one combatant on the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub attacker: String,
    pub target: String,
    pub amount: u32,
    pub target_hp: u32,
    pub target_max_hp: u32,
}

/// Everything that happened during a single `attack`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub player_strike: Exchange,
    /// Absent when the player's blow was fatal.
    pub retaliation: Option<Exchange>,
    pub outcome: Option<CombatOutcome>,
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub enemy_hp: u32,
    pub enemy_max_hp: u32,
}

/// Details shown when the enemy first steps out of the dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encounter {
    pub enemy_name: String,
    pub description: String,
    pub enemy_hp: u32,
    pub enemy_max_hp: u32,
    pub player_hp: u32,
    pub player_max_hp: u32,
}

/// Start the fight if the player has just walked into a living enemy's lair.
///
/// The enemy is spawned from its definition the first time; a defeated enemy is never
/// brought back. Returns `None` when no fight begins.
pub fn begin_encounter(world: &mut ShadowWorld) -> Option<Encounter> {
    if world.combat != CombatState::Inactive {
        return None;
    }
    let here = world.player.location.room_ref()?.clone();
    if world.enemy.is_none() {
        let def = world.enemy_def.as_ref().filter(|def| def.room == here)?;
        world.enemy = Some(Enemy::spawn(def));
    }
    let enemy = world.enemy.as_mut()?;
    if enemy.room != here || !enemy.is_alive() || enemy.state.is_defeated() {
        return None;
    }
    enemy.engage();
    world.combat = CombatState::PlayerTurn;
    info!("combat begins: {} vs {} in '{here}'", world.player.name, enemy.name);
    Some(Encounter {
        enemy_name: enemy.name.clone(),
        description: enemy.description.clone(),
        enemy_hp: enemy.current_hp(),
        enemy_max_hp: enemy.max_hp(),
        player_hp: world.player.current_hp(),
        player_max_hp: world.player.max_hp(),
    })
}

/// Resolve one round of combat.
///
/// The player always strikes first. If the enemy survives it retaliates. Reaching zero
/// health on either side resolves the fight and sets the world status.
///
/// # Errors
/// - `CombatNotActive` if no fight is underway
pub fn attack<R: DamageRoller + ?Sized>(world: &mut ShadowWorld, roller: &mut R) -> Result<AttackReport, EngineError> {
    if !world.combat_active() {
        return Err(EngineError::CombatNotActive);
    }
    let player = &mut world.player;
    let Some(enemy) = world.enemy.as_mut() else {
        return Err(EngineError::CombatNotActive);
    };

    let dealt = roller.roll(player.damage);
    enemy.damage(dealt);
    info!(
        "{} hits {} for {dealt} ({}/{} hp left)",
        player.name,
        enemy.name,
        enemy.current_hp(),
        enemy.max_hp()
    );
    let player_strike = Exchange {
        attacker: player.name.clone(),
        target: enemy.name.clone(),
        amount: dealt,
        target_hp: enemy.current_hp(),
        target_max_hp: enemy.max_hp(),
    };

    let mut retaliation = None;
    let outcome = if enemy.is_alive() {
        let taken = roller.roll(enemy.damage);
        player.damage(taken);
        info!(
            "{} strikes back for {taken} ({}/{} hp left)",
            enemy.name,
            player.current_hp(),
            player.max_hp()
        );
        retaliation = Some(Exchange {
            attacker: enemy.name.clone(),
            target: player.name.clone(),
            amount: taken,
            target_hp: player.current_hp(),
            target_max_hp: player.max_hp(),
        });
        if player.is_alive() { None } else { Some(CombatOutcome::Defeat) }
    } else {
        enemy.defeat();
        Some(CombatOutcome::Victory)
    };

    let report = AttackReport {
        player_strike,
        retaliation,
        outcome,
        player_hp: player.current_hp(),
        player_max_hp: player.max_hp(),
        enemy_hp: enemy.current_hp(),
        enemy_max_hp: enemy.max_hp(),
    };

    if let Some(outcome) = outcome {
        world.combat = CombatState::Resolved(outcome);
        world.status = match outcome {
            CombatOutcome::Victory => GameStatus::Won,
            CombatOutcome::Defeat => GameStatus::Lost,
        };
        match outcome {
            CombatOutcome::Victory => info!("combat resolved: victory"),
            CombatOutcome::Defeat => warn!("combat resolved: {} has fallen", world.player.name()),
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRoller;
    use crate::{DamageRange, Location, Room};
    use shadow_data::EnemyDef;

    fn arena_world(player_hp: u32, enemy_hp: u32) -> ShadowWorld {
        let mut world = ShadowWorld::new_empty();
        world.rooms.insert("hall".into(), Room::new("hall", "Hall", "Quiet."));
        world.rooms.insert("arena".into(), Room::new("arena", "Arena", "Tense."));
        world.player.health = crate::health::HealthState::new_at_max(player_hp);
        world.player.damage = DamageRange::new(1, 6);
        world.enemy_def = Some(EnemyDef {
            id: "warrior".into(),
            name: "Dark Warrior".into(),
            desc: "A menacing shadow.".into(),
            room: "arena".into(),
            max_hp: enemy_hp,
            damage: DamageRange::new(1, 4),
        });
        world.player.location = Location::Room("arena".into());
        world
    }

    #[test]
    fn encounter_spawns_enemy_once() {
        let mut world = arena_world(20, 10);
        let encounter = begin_encounter(&mut world).expect("fight should start");
        assert_eq!(encounter.enemy_name, "Dark Warrior");
        assert_eq!(encounter.enemy_hp, 10);
        assert_eq!(world.combat, CombatState::PlayerTurn);
        assert!(world.combat_active());
        assert!(begin_encounter(&mut world).is_none());
    }

    #[test]
    fn no_encounter_outside_lair() {
        let mut world = arena_world(20, 10);
        world.player.location = Location::Room("hall".into());
        assert!(begin_encounter(&mut world).is_none());
        assert!(world.enemy.is_none());
    }

    #[test]
    fn attack_without_fight_is_rejected() {
        let mut world = arena_world(20, 10);
        let mut roller = ScriptedRoller::new([3]);
        assert_eq!(attack(&mut world, &mut roller), Err(EngineError::CombatNotActive));
        assert_eq!(roller.remaining(), 1);
    }

    #[test]
    fn fatal_blow_wins_without_retaliation() {
        let mut world = arena_world(20, 10);
        begin_encounter(&mut world);
        let mut roller = ScriptedRoller::new([10, 4]);
        let report = attack(&mut world, &mut roller).unwrap();
        assert_eq!(report.outcome, Some(CombatOutcome::Victory));
        assert!(report.retaliation.is_none());
        assert_eq!(report.player_hp, 20);
        assert_eq!(roller.remaining(), 1);
        assert_eq!(world.status, GameStatus::Won);
        assert!(world.enemy.as_ref().unwrap().state.is_defeated());
    }

    #[test]
    fn overkill_clamps_to_zero() {
        let mut world = arena_world(20, 5);
        begin_encounter(&mut world);
        let report = attack(&mut world, &mut ScriptedRoller::new([99])).unwrap();
        assert_eq!(report.enemy_hp, 0);
    }

    #[test]
    fn player_falls_when_retaliation_is_lethal() {
        let mut world = arena_world(3, 10);
        begin_encounter(&mut world);
        let report = attack(&mut world, &mut ScriptedRoller::new([1, 4])).unwrap();
        assert_eq!(report.outcome, Some(CombatOutcome::Defeat));
        assert_eq!(report.player_hp, 0);
        assert_eq!(world.combat, CombatState::Resolved(CombatOutcome::Defeat));
        assert_eq!(world.status, GameStatus::Lost);
        assert!(!world.combat_active());
    }

    #[test]
    fn trading_blows_keeps_player_turn() {
        let mut world = arena_world(20, 10);
        begin_encounter(&mut world);
        let report = attack(&mut world, &mut ScriptedRoller::new([3, 2])).unwrap();
        assert_eq!(report.outcome, None);
        assert_eq!((report.enemy_hp, report.player_hp), (7, 18));
        assert_eq!(world.combat, CombatState::PlayerTurn);
        assert_eq!(world.status, GameStatus::Continue);
    }

    #[test]
    fn fight_always_terminates() {
        let mut world = arena_world(20, 10);
        begin_encounter(&mut world);
        let mut roller = crate::dice::SeededRoller::new(99);
        let mut rounds = 0;
        while world.combat == CombatState::PlayerTurn {
            attack(&mut world, &mut roller).unwrap();
            rounds += 1;
            assert!(rounds <= 30, "combat did not resolve");
        }
        assert!(world.status.is_terminal());
    }
}
