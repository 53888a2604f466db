//! View module.
//!
//! Handlers never print. Each one pushes `ViewItem`s into the turn's `View`, which sorts
//! them into sections and renders them once the command has finished.
use std::fmt::Write;

use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::combat::{Encounter, Exchange};
use crate::loader::help::HelpCommand;
use crate::room::RoomSnapshot;
use crate::style::{GameStyle, indented_block, normal_block};

const ICON_SUCCESS: &str = "\u{2611}"; // ☑
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_HARMED: &str = "\u{2623}"; // biohazard sign
const ICON_CELEBRATE: &str = "🎉"; // U+1F389
const ICON_DEATH: &str = "☠";
const ICON_ENGINE: &str = "⚙";

/// Display section a `ViewItem` belongs to, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Transition,
    Environment,
    DirectResult,
    Combat,
    System,
}

/// Everything the engine may want to show the player after a command.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionSuccess(String),
    CombatBegins(Encounter),
    Defeat {
        enemy: String,
    },
    EnemyStrike(Exchange),
    EngineMessage(String),
    Error(String),
    Help(Vec<HelpCommand>),
    Inventory(Vec<String>),
    ItemText {
        name: String,
        text: String,
    },
    PlayerStrike(Exchange),
    QuitSummary {
        message: String,
        turns: usize,
        visited: usize,
        total_rooms: usize,
    },
    RoomDescription(RoomSnapshot),
    TransitionMessage(String),
    Victory {
        enemy: String,
    },
}
impl ViewItem {
    pub fn section(&self) -> Section {
        match self {
            ViewItem::TransitionMessage(_) => Section::Transition,
            ViewItem::RoomDescription(_) => Section::Environment,
            ViewItem::ActionSuccess(_) | ViewItem::Error(_) | ViewItem::Inventory(_) | ViewItem::ItemText { .. } => {
                Section::DirectResult
            },
            ViewItem::CombatBegins(_)
            | ViewItem::PlayerStrike(_)
            | ViewItem::EnemyStrike(_)
            | ViewItem::Victory { .. }
            | ViewItem::Defeat { .. } => Section::Combat,
            ViewItem::Help(_) | ViewItem::QuitSummary { .. } | ViewItem::EngineMessage(_) => Section::System,
        }
    }

    /// Unstyled rendering, used for transcripts and tests.
    pub fn plain_text(&self) -> String {
        match self {
            ViewItem::TransitionMessage(msg)
            | ViewItem::ActionSuccess(msg)
            | ViewItem::Error(msg)
            | ViewItem::EngineMessage(msg) => msg.clone(),
            ViewItem::RoomDescription(room) => room_plain_text(room),
            ViewItem::ItemText { name, text } => format!("You read the {name}:\n{text}"),
            ViewItem::Inventory(names) => {
                if names.is_empty() {
                    "Your inventory is empty.".to_string()
                } else {
                    let mut out = String::from("Inventory:");
                    for name in names {
                        let _ = write!(out, "\n  - {name}");
                    }
                    out
                }
            },
            ViewItem::CombatBegins(encounter) => format!(
                "{} emerges from the shadows! {}\nEnemy Health: {}/{} HP\nYour Health: {}/{} HP",
                encounter.enemy_name,
                encounter.description,
                encounter.enemy_hp,
                encounter.enemy_max_hp,
                encounter.player_hp,
                encounter.player_max_hp
            ),
            ViewItem::PlayerStrike(hit) => format!(
                "You attack the {} for {} damage! Enemy Health: {}/{} HP",
                hit.target, hit.amount, hit.target_hp, hit.target_max_hp
            ),
            ViewItem::EnemyStrike(hit) => format!(
                "The {} strikes back for {} damage! Your Health: {}/{} HP",
                hit.attacker, hit.amount, hit.target_hp, hit.target_max_hp
            ),
            ViewItem::Victory { enemy } => {
                format!("VICTORY! You defeated the {enemy}! You have conquered the Shadow Dungeon!")
            },
            ViewItem::Defeat { enemy } => {
                format!("DEFEAT! The {enemy} has bested you. The darkness consumes you...")
            },
            ViewItem::Help(commands) => {
                let mut out = String::from("Available commands:");
                for cmd in commands {
                    let _ = write!(out, "\n  {} - {}", cmd.command, cmd.description);
                }
                out
            },
            ViewItem::QuitSummary {
                message,
                turns,
                visited,
                total_rooms,
            } => format!("{message}\nTurns taken: {turns}. Rooms explored: {visited}/{total_rooms}."),
        }
    }
}

fn room_plain_text(room: &RoomSnapshot) -> String {
    let mut out = format!("=== {} ===\n{}", room.name, room.description);
    if !room.items.is_empty() {
        out.push_str("\nYou can see:");
        for item in &room.items {
            let _ = write!(out, "\n  - A {item}");
        }
    }
    if !room.exits.is_empty() {
        let exits: Vec<String> = room
            .exits
            .iter()
            .map(|exit| {
                if exit.locked {
                    format!("{} (locked)", exit.direction)
                } else {
                    exit.direction.clone()
                }
            })
            .collect();
        let _ = write!(out, "\nExits: {}", exits.join(", "));
    }
    out
}

/// Aggregates the `ViewItem`s produced by one turn.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub items: Vec<ViewItem>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Unstyled text of everything queued this turn, one item per paragraph.
    pub fn transcript(&self) -> String {
        self.items.iter().map(ViewItem::plain_text).collect::<Vec<_>>().join("\n\n")
    }

    /// Returns the text of every queued error.
    pub fn errors(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                ViewItem::Error(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Compose and display everything queued this turn, then clear the buffer.
    pub fn flush(&mut self) {
        let width = termwidth();
        let mut items = std::mem::take(&mut self.items);
        // stable: items within a section keep their push order
        items.sort_by_key(ViewItem::section);

        let mut current = None;
        for item in &items {
            let section = item.section();
            if current != Some(section) {
                current = Some(section);
                if let Some(title) = section_title(section) {
                    println!("{:.>width$}\n", title.section_style(), width = width);
                }
            }
            render(item);
        }
        println!();
    }
}

fn section_title(section: Section) -> Option<&'static str> {
    match section {
        Section::Transition => None,
        Section::Environment => Some("scene"),
        Section::DirectResult => Some("results"),
        Section::Combat => Some("combat"),
        Section::System => Some("game"),
    }
}

fn render(item: &ViewItem) {
    match item {
        ViewItem::TransitionMessage(msg) => println!("{}\n", fill(msg, normal_block()).transition_style()),
        ViewItem::RoomDescription(room) => render_room(room),
        ViewItem::ActionSuccess(msg) => {
            println!("{}\n", fill(&format!("{ICON_SUCCESS:<4}{}", msg.success_style()), normal_block()));
        },
        ViewItem::Error(msg) => {
            println!("{}\n", fill(&format!("{:<4}{}", ICON_ERROR.error_style(), msg.error_style()), normal_block()));
        },
        ViewItem::ItemText { name, text } => {
            println!("You read the {}:", name.item_style());
            println!("{}\n", fill(text, indented_block()).description_style());
        },
        ViewItem::Inventory(names) => {
            if names.is_empty() {
                println!("{}\n", "Your inventory is empty.".italic());
            } else {
                println!("{}", "Inventory:".subheading_style());
                for name in names {
                    println!("  - {}", name.item_style());
                }
                println!();
            }
        },
        ViewItem::CombatBegins(encounter) => {
            let banner = format!("{} EMERGES FROM THE SHADOWS!", encounter.enemy_name.to_uppercase());
            println!("{}", banner.as_str().enemy_style());
            println!("{}", fill(&encounter.description, normal_block()).description_style());
            println!(
                "Enemy Health: {}/{} HP   Your Health: {}/{} HP",
                encounter.enemy_hp, encounter.enemy_max_hp, encounter.player_hp, encounter.player_max_hp
            );
            println!("{}\n", "Type 'attack' to fight!".italic());
        },
        ViewItem::PlayerStrike(_) | ViewItem::EnemyStrike(_) => {
            println!("{:<4}{}", ICON_HARMED.harm_style(), item.plain_text());
        },
        ViewItem::Victory { .. } => {
            println!("\n{:<4}{}\n", ICON_CELEBRATE, item.plain_text().victory_style());
        },
        ViewItem::Defeat { .. } => {
            println!("\n{:<4}{}\n", ICON_DEATH.defeat_style(), item.plain_text().defeat_style());
        },
        ViewItem::Help(commands) => {
            println!("{}", "Available commands:".subheading_style());
            for cmd in commands {
                println!("  {:<36}{}", cmd.command.as_str().item_style(), cmd.description);
            }
            println!();
        },
        ViewItem::QuitSummary {
            message,
            turns,
            visited,
            total_rooms,
        } => {
            println!("{}", message.as_str().description_style());
            println!("Turns taken: {turns}. Rooms explored: {visited}/{total_rooms}.\n");
        },
        ViewItem::EngineMessage(msg) => println!("{ICON_ENGINE:<4}{msg}\n"),
    }
}

fn render_room(room: &RoomSnapshot) {
    println!("{}", room.name.room_titlebar_style());
    println!("{}\n", fill(&room.description, normal_block()).description_style());
    if !room.items.is_empty() {
        println!("{}", "You can see:".subheading_style());
        for item in &room.items {
            println!("  - A {}", item.item_style());
        }
        println!();
    }
    if !room.exits.is_empty() {
        let exits: Vec<String> = room
            .exits
            .iter()
            .map(|exit| {
                if exit.locked {
                    exit.direction.exit_locked_style().to_string()
                } else {
                    exit.direction.exit_open_style().to_string()
                }
            })
            .collect();
        println!("Exits: {}\n", exits.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::ExitSummary;

    #[test]
    fn success_icon_is_ballot_box_with_check() {
        assert_eq!(ICON_SUCCESS, "☑");
    }

    fn snapshot() -> RoomSnapshot {
        RoomSnapshot {
            name: "Starting Chamber".into(),
            description: "Cold and damp.".into(),
            items: vec!["key".into()],
            exits: vec![ExitSummary {
                direction: "north".into(),
                locked: true,
            }],
        }
    }

    #[test]
    fn room_text_lists_items_and_exits() {
        let text = ViewItem::RoomDescription(snapshot()).plain_text();
        assert!(text.starts_with("=== Starting Chamber ==="));
        assert!(text.contains("  - A key"));
        assert!(text.contains("Exits: north (locked)"));
    }

    #[test]
    fn empty_inventory_has_its_own_message() {
        assert_eq!(ViewItem::Inventory(Vec::new()).plain_text(), "Your inventory is empty.");
        assert_eq!(
            ViewItem::Inventory(vec!["key".into()]).plain_text(),
            "Inventory:\n  - key"
        );
    }

    #[test]
    fn sections_order_rendering() {
        assert!(Section::Transition < Section::Environment);
        assert_eq!(ViewItem::Error("x".into()).section(), Section::DirectResult);
        assert_eq!(ViewItem::Victory { enemy: "x".into() }.section(), Section::Combat);
    }

    #[test]
    fn flush_clears_buffer() {
        let mut view = View::new();
        view.push(ViewItem::Error("nope".into()));
        view.push(ViewItem::RoomDescription(snapshot()));
        assert_eq!(view.errors(), vec!["nope"]);
        assert!(view.transcript().contains("nope"));
        view.flush();
        assert!(view.is_empty());
    }
}
