//! Flavour text spinners.
//!
//! Each spinner holds a handful of interchangeable lines; the view asks for one at random
//! so repeated actions don't always read the same.

use std::collections::HashMap;

use gametools::{Spinner, Wedge};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpinnerType {
    Movement,
    QuitMsg,
}

const MOVEMENT_LINES: &[&str] = &[
    "You head",
    "You make your way",
    "You creep",
    "You press on",
    "Your footsteps echo as you go",
];

const QUIT_LINES: &[&str] = &[
    "Thanks for playing! Goodbye.",
    "The shadows will wait for your return.",
    "You turn away from the dungeon, for now.",
];

fn spinner_from(lines: &[&str]) -> Spinner<String> {
    Spinner::new(lines.iter().map(|line| Wedge::new((*line).to_string())).collect())
}

/// The built-in spinner set installed in every new world.
pub fn default_spinners() -> HashMap<SpinnerType, Spinner<String>> {
    let mut spinners = HashMap::new();
    spinners.insert(SpinnerType::Movement, spinner_from(MOVEMENT_LINES));
    spinners.insert(SpinnerType::QuitMsg, spinner_from(QUIT_LINES));
    spinners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_spinner_type_has_lines() {
        let spinners = default_spinners();
        for kind in [SpinnerType::Movement, SpinnerType::QuitMsg] {
            let line = spinners[&kind].spin().expect("spinner should not be empty");
            assert!(!line.is_empty());
        }
    }

    #[test]
    fn movement_lines_come_from_the_list() {
        let spinners = default_spinners();
        let line = spinners[&SpinnerType::Movement].spin().unwrap();
        assert!(MOVEMENT_LINES.contains(&line.as_str()));
    }
}
