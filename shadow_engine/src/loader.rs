//! Loader utilities for building a `ShadowWorld`.
//!
//! The dungeon is authored in code as a `WorldDef`, tuned by the `GameConfig`,
//! checked by `shadow_data::validate_world`, then converted into runtime structs.

pub mod dungeon;
pub mod help;
pub mod worlddef;

use anyhow::{Context, Result, bail};
use log::info;
use shadow_data::WorldDef;

use crate::config::GameConfig;
use crate::loader::dungeon::shadow_dungeon;
use crate::loader::worlddef::build_world_from_def;
use crate::{ShadowWorld, WorldObject};

/// Build the Shadow Dungeon for the given configuration.
///
/// # Errors
/// Errors bubble up from validation or from conversion into runtime structs.
pub fn load_world(config: &GameConfig) -> Result<ShadowWorld> {
    let worlddef = shadow_dungeon(config);
    load_world_from_def(&worlddef)
}

/// Validate and build a world from any `WorldDef`.
///
/// # Errors
/// Fails with every validation problem listed if the definition is inconsistent.
pub fn load_world_from_def(worlddef: &WorldDef) -> Result<ShadowWorld> {
    validate_worlddef(worlddef)?;
    let world = build_world_from_def(worlddef).context("while building world from worlddef")?;
    info!("{} spinners added to ShadowWorld", world.spinners.len());
    info!("{} rooms added to ShadowWorld", world.rooms.len());
    info!("{} items added to ShadowWorld", world.items.len());
    info!(
        "player \"{}\" added to ShadowWorld at {:?}",
        world.player.name(),
        world.player.location
    );
    if let Some(enemy) = &world.enemy_def {
        info!("enemy \"{}\" lurks in '{}'", enemy.name, enemy.room);
    }
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = shadow_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
