//! Room definitions and spatial utilities.
//!
//! Captures room metadata and exits, including doors that must be unlocked
//! before an exit can be used.

use crate::{Id, Item, ItemHolder, Location, WorldObject};

use shadow_data::LockDef;
use std::collections::{BTreeMap, HashMap};

/// Whether a door currently bars the way. `Locked -> Unlocked` is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Unlocked,
}

/// How a typed password is compared with a door's secret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordPolicy {
    #[default]
    CaseInsensitive,
    Exact,
}

/// A door standing in an exit, opened by holding its key and speaking its password.
#[derive(Debug, Clone)]
pub struct Door {
    pub state: LockState,
    pub key_item: Id,
    pub policy: PasswordPolicy,
    secret: String,
}
impl Door {
    /// Create a locked door.
    pub fn locked(key_item: &str, secret: &str, policy: PasswordPolicy) -> Self {
        Self {
            state: LockState::Locked,
            key_item: key_item.to_string(),
            policy,
            secret: secret.to_string(),
        }
    }

    /// Build a door from its definition.
    pub fn from_def(def: &LockDef) -> Self {
        let policy = if def.case_sensitive {
            PasswordPolicy::Exact
        } else {
            PasswordPolicy::CaseInsensitive
        };
        Self::locked(&def.key_item, &def.password, policy)
    }

    pub fn is_locked(&self) -> bool {
        self.state == LockState::Locked
    }

    /// Returns true if `attempt` matches the secret under this door's policy.
    pub fn accepts(&self, attempt: &str) -> bool {
        let attempt = attempt.trim();
        match self.policy {
            PasswordPolicy::Exact => attempt == self.secret,
            PasswordPolicy::CaseInsensitive => attempt.to_lowercase() == self.secret.to_lowercase(),
        }
    }

    /// Unlock for good.
    pub fn unlock(&mut self) {
        self.state = LockState::Unlocked;
    }
}

/// An exit from one room to another, possibly through a door.
#[derive(Debug, Clone)]
pub struct Exit {
    pub to: Id,
    pub door: Option<Door>,
}
impl Exit {
    /// Create a basic open exit leading to the room with the given id.
    pub fn new(to: &str) -> Self {
        Self {
            to: to.to_string(),
            door: None,
        }
    }

    /// Create an exit through a door.
    pub fn with_door(to: &str, door: Door) -> Self {
        Self {
            to: to.to_string(),
            door: Some(door),
        }
    }

    /// True if a locked door bars this exit.
    pub fn is_locked(&self) -> bool {
        self.door.as_ref().is_some_and(Door::is_locked)
    }
}

/// What the player sees of a single exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitSummary {
    pub direction: String,
    pub locked: bool,
}

/// Everything the player can perceive on entering or looking around a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub name: String,
    pub description: String,
    pub items: Vec<String>,
    pub exits: Vec<ExitSummary>,
}

/// Any visitable location in the game world.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: Id,
    pub name: String,
    pub base_description: String,
    pub location: Location,
    pub visited: bool,
    pub exits: BTreeMap<String, Exit>,
    /// Item ids in the order they were placed.
    pub contents: Vec<Id>,
}
impl WorldObject for Room {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.base_description
    }
    fn location(&self) -> &Location {
        &self.location
    }
}
impl ItemHolder for Room {
    fn add_item(&mut self, item_id: Id) {
        if !self.contents.contains(&item_id) {
            self.contents.push(item_id);
        }
    }

    fn remove_item(&mut self, item_id: &str) {
        self.contents.retain(|id| id != item_id);
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.contents.iter().any(|id| id == item_id)
    }
}
impl Room {
    /// Create an empty, unvisited room with no exits.
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            base_description: description.to_string(),
            location: Location::Nowhere,
            visited: false,
            exits: BTreeMap::new(),
            contents: Vec::new(),
        }
    }

    /// Find an exit by direction, ignoring case. Returns the direction as the room names it.
    pub fn exit(&self, direction: &str) -> Option<(&str, &Exit)> {
        let wanted = direction.trim().to_lowercase();
        self.exits
            .iter()
            .find(|(dir, _)| dir.to_lowercase() == wanted)
            .map(|(dir, exit)| (dir.as_str(), exit))
    }

    /// Find an exit that has a door. With no direction, the first door in the room is used.
    pub fn door_direction(&self, direction: Option<&str>) -> Option<String> {
        match direction {
            Some(dir) => {
                let wanted = dir.trim().to_lowercase();
                self.exits
                    .iter()
                    .find(|(d, exit)| d.to_lowercase() == wanted && exit.door.is_some())
                    .map(|(d, _)| d.clone())
            },
            None => self
                .exits
                .iter()
                .find(|(_, exit)| exit.door.is_some())
                .map(|(d, _)| d.clone()),
        }
    }

    /// Capture the room as the player would see it.
    pub fn snapshot(&self, items: &HashMap<Id, Item>) -> RoomSnapshot {
        RoomSnapshot {
            name: self.name.clone(),
            description: self.base_description.clone(),
            items: self
                .contents
                .iter()
                .filter_map(|id| items.get(id).map(|item| item.name.clone()))
                .collect(),
            exits: self
                .exits
                .iter()
                .map(|(direction, exit)| ExitSummary {
                    direction: direction.clone(),
                    locked: exit.is_locked(),
                })
                .collect(),
        }
    }
}
