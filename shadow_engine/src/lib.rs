#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const SHADOW_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod combat;
pub mod command;
pub mod config;
pub mod data_paths;
pub mod dice;
pub mod enemy;
pub mod error;
pub mod health;
pub mod inventory;
pub mod item;
pub mod loader;
pub mod navigation;
pub mod player;
pub mod puzzle;
pub mod repl;
pub mod room;
pub mod spinners;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use combat::{CombatOutcome, CombatState};
pub use config::GameConfig;
pub use dice::{DamageRoller, ScriptedRoller, SeededRoller};
pub use enemy::Enemy;
pub use error::EngineError;
pub use item::{Item, ItemHolder};
pub use loader::load_world;
pub use player::Player;
pub use repl::{execute, run_repl};
pub use room::Room;
pub use shadow_data::{DamageRange, Id};
pub use view::{View, ViewItem};
pub use world::{GameStatus, Location, ShadowWorld, WorldObject};
