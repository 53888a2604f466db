//! Command module
//!
//! Turns a line of player input into a `Command`.

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    Attack,
    Help,
    Inventory,
    Look,
    MoveTo(String),
    Open {
        direction: Option<String>,
    },
    Quit,
    Read(String),
    Take(String),
    Unknown,
    Unlock {
        direction: Option<String>,
        password: String,
    },
}
impl Command {
    /// Commands that remain available while a fight is underway.
    pub fn allowed_in_combat(&self) -> bool {
        matches!(
            self,
            Command::Attack | Command::Quit | Command::Help | Command::Look | Command::Inventory
        )
    }
}

/// Expand a direction or its one-letter abbreviation to the full word.
pub fn normalize_direction(word: &str) -> Option<&'static str> {
    match word {
        "n" | "north" => Some("north"),
        "s" | "south" => Some("south"),
        "e" | "east" => Some("east"),
        "w" | "west" => Some("west"),
        "u" | "up" => Some("up"),
        "d" | "down" => Some("down"),
        _ => None,
    }
}

fn direction_or_word(word: &str) -> String {
    normalize_direction(word).map_or_else(|| word.to_string(), str::to_string)
}

/// Parses an input string and returns a corresponding `Command`.
///
/// Matching ignores case, except for an unlock password, which is taken from the input as typed.
pub fn parse_command(input: &str) -> Command {
    let raw: Vec<&str> = input.split_whitespace().collect();
    let lowered: Vec<String> = raw.iter().map(|word| word.to_lowercase()).collect();
    let words: Vec<&str> = lowered.iter().map(String::as_str).collect();
    match words.as_slice() {
        ["look" | "l"] => Command::Look,
        ["look", "at", thing @ ..] | ["read" | "examine", thing @ ..] if !thing.is_empty() => {
            Command::Read(thing.join(" "))
        },
        ["go" | "move" | "walk" | "head", dir] => Command::MoveTo(direction_or_word(dir)),
        [dir] if normalize_direction(dir).is_some() => Command::MoveTo(direction_or_word(dir)),
        ["pick", "up", thing @ ..] | ["take" | "get" | "grab", thing @ ..] if !thing.is_empty() => {
            Command::Take(thing.join(" "))
        },
        ["inventory" | "inv" | "i"] => Command::Inventory,
        ["unlock", ..] => parse_unlock(&raw, &words),
        ["open", door @ ..] => door_direction(door).map_or(Command::Unknown, |direction| Command::Open { direction }),
        ["attack" | "fight" | "hit" | "strike"] => Command::Attack,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit" | "q"] => Command::Quit,
        _ => Command::Unknown,
    }
}

/// `unlock [the] [<dir>] door with <password>`
fn parse_unlock(raw: &[&str], words: &[&str]) -> Command {
    let Some(with_at) = words.iter().position(|word| *word == "with") else {
        return Command::Unknown;
    };
    let password = raw[with_at + 1..].join(" ");
    if password.is_empty() {
        return Command::Unknown;
    }
    match door_direction(&words[1..with_at]) {
        Some(direction) => Command::Unlock { direction, password },
        None => Command::Unknown,
    }
}

/// Accepts `[the] [<dir>] door`, yielding the optional direction.
fn door_direction(words: &[&str]) -> Option<Option<String>> {
    let words = match words {
        ["the", rest @ ..] => rest,
        rest => rest,
    };
    match words {
        ["door"] => Some(None),
        [dir, "door"] => normalize_direction(dir).map(|dir| Some(dir.to_string())),
        _ => None,
    }
}
