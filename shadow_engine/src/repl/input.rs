//! Terminal input handling for the Shadow REPL.
//!
//! Wraps rustyline configuration and tab completion of command words, with a plain
//! stdin fallback when no terminal is attached.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::data_paths::history_path;

/// Outcome of reading a line from the REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

const COMMAND_PHRASES: &[&str] = &[
    "attack",
    "down",
    "east",
    "examine",
    "exit",
    "fight",
    "get",
    "go",
    "grab",
    "head",
    "help",
    "hit",
    "inventory",
    "look",
    "look at",
    "move",
    "north",
    "open door",
    "open the door",
    "pick up",
    "quit",
    "read",
    "south",
    "strike",
    "take",
    "unlock door with",
    "unlock the door with",
    "up",
    "walk",
    "west",
];

lazy_static! {
    static ref COMMAND_TERMS: Vec<String> = build_command_terms();
}

type ReplEditor = rustyline::Editor<ShadowHelper, DefaultHistory>;

#[derive(Default)]
struct ShadowHelper;

impl Helper for ShadowHelper {}

impl Completer for ShadowHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        Ok((start, completions(&prefix)))
    }
}

impl Hinter for ShadowHelper {
    type Hint = String;
}

impl Highlighter for ShadowHelper {}

impl Validator for ShadowHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn completions(prefix: &str) -> Vec<Pair> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let lower = prefix.to_lowercase();
    COMMAND_TERMS
        .iter()
        .filter(|term| term.starts_with(&lower))
        .map(|term| Pair {
            display: term.clone(),
            replacement: term.clone(),
        })
        .collect()
}

fn build_command_terms() -> Vec<String> {
    let mut terms: Vec<String> = COMMAND_PHRASES.iter().map(|phrase| (*phrase).to_string()).collect();
    terms.sort_unstable();
    terms.dedup();
    terms
}

/// Source of player input: a line editor on a terminal, or plain stdin when piped.
pub enum InputManager {
    Editor {
        editor: Box<ReplEditor>,
        history: Option<PathBuf>,
    },
    Piped,
}

impl InputManager {
    pub fn new() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a TTY; reading plain lines");
            return InputManager::Piped;
        }
        let history = history_path();
        match open_editor(history.as_deref()) {
            Ok(editor) => InputManager::Editor {
                editor: Box::new(editor),
                history,
            },
            Err(err) => {
                warn!("failed to initialize rustyline ({err}); reading plain lines");
                InputManager::Piped
            },
        }
    }

    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            InputManager::Editor { editor, history } => match editor.readline(prompt) {
                Ok(line) => {
                    remember(editor, history.as_deref(), &line);
                    Ok(InputEvent::Line(line))
                },
                Err(err) => readline_event(err),
            },
            InputManager::Piped => {
                print!("{prompt}");
                io::stdout().flush()?;
                read_piped(&mut io::stdin().lock())
            },
        }
    }
}

fn open_editor(history: Option<&Path>) -> rustyline::Result<ReplEditor> {
    let mut editor = ReplEditor::new()?;
    editor.set_helper(Some(ShadowHelper));
    let Some(path) = history else {
        return Ok(editor);
    };
    if let Some(dir) = path.parent()
        && let Err(err) = fs::create_dir_all(dir)
    {
        warn!("failed to create history directory {}: {err}", dir.display());
    }
    match editor.load_history(path) {
        Ok(()) => {},
        Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            info!("no command history at {} yet", path.display());
        },
        Err(err) => warn!("failed to load history from {}: {err}", path.display()),
    }
    Ok(editor)
}

/// Record a non-blank line in the editor history and persist it.
fn remember(editor: &mut ReplEditor, history: Option<&Path>, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    if let Err(err) = editor.add_history_entry(line) {
        warn!("failed to append to history: {err}");
    }
    if let Some(path) = history
        && let Err(err) = editor.save_history(path)
    {
        warn!("failed to persist history to {}: {err}", path.display());
    }
}

/// Read one line, without its line ending, from a non-interactive source.
fn read_piped(reader: &mut impl BufRead) -> io::Result<InputEvent> {
    let mut buffer = String::new();
    if reader.read_line(&mut buffer)? == 0 {
        return Ok(InputEvent::Eof);
    }
    let line = buffer.trim_end_matches(['\r', '\n']);
    Ok(InputEvent::Line(line.to_string()))
}

fn readline_event(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}
