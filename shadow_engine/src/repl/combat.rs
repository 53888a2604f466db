//! `repl::combat` module
//!
//! Handlers for the fight with the enemy.

use crate::combat::{CombatOutcome, Encounter, attack};
use crate::dice::DamageRoller;
use crate::repl::report;
use crate::{ShadowWorld, View, ViewItem};

/// Announce a fight that has just begun.
pub fn push_encounter(view: &mut View, encounter: Encounter) {
    view.push(ViewItem::CombatBegins(encounter));
}

/// Resolve one round of combat and report both blows.
pub fn attack_handler<R: DamageRoller + ?Sized>(world: &mut ShadowWorld, roller: &mut R, view: &mut View) {
    match attack(world, roller) {
        Ok(round) => {
            let enemy = round.player_strike.target.clone();
            view.push(ViewItem::PlayerStrike(round.player_strike));
            if let Some(hit) = round.retaliation {
                view.push(ViewItem::EnemyStrike(hit));
            }
            match round.outcome {
                Some(CombatOutcome::Victory) => view.push(ViewItem::Victory { enemy }),
                Some(CombatOutcome::Defeat) => view.push(ViewItem::Defeat { enemy }),
                None => {},
            }
        },
        Err(err) => report(view, &err),
    }
}
