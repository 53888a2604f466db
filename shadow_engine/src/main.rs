#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Shadow Dungeon **
//! A short turn-based text adventure

use std::io::Write;
use std::process::ExitCode;

use shadow_engine::config::discover_config;
use shadow_engine::style::GameStyle;
use shadow_engine::{GameStatus, SeededRoller, View, ViewItem, WorldObject, load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

fn main() -> Result<ExitCode> {
    env_logger::init();
    let config = discover_config();
    info!("Start: loading Shadow world...");
    let mut world = load_world(&config).context("while loading ShadowWorld")?;
    info!("ShadowWorld loaded successfully.");

    let mut roller = match config.seed {
        Some(seed) => SeededRoller::new(seed),
        None => SeededRoller::from_entropy(),
    };
    info!("damage roller seeded with {}", roller.seed());

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("flushing stdout")?;
    info!("Starting the game!");

    println!("{:^60}", world.title.to_uppercase().bright_yellow().underline());
    println!(
        "\nYou are {}, {}\n",
        world.player.name().bold().bright_blue(),
        world.player.description()
    );
    println!("{}", world.intro.description_style());

    let mut view = View::new();
    match shadow_engine::navigation::describe_current_room(&world) {
        Ok(room) => view.push(ViewItem::RoomDescription(room)),
        Err(err) => view.push(ViewItem::Error(err.to_string())),
    }
    view.flush();

    let status = run_repl(&mut world, &mut roller)?;
    Ok(match status {
        GameStatus::Lost => ExitCode::from(1),
        _ => ExitCode::SUCCESS,
    })
}
