//! Engine error taxonomy.
//!
//! Every variant is recoverable: the interpreter reports the message and the world stays
//! ready for the next command. The `Display` text is what the player sees.

use thiserror::Error;

use crate::Id;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("I don't understand that command. Type 'help' for available commands.")]
    Parse,
    #[error("You can't go {0}.")]
    NoSuchExit(String),
    #[error("The door is locked. You need to unlock it first.")]
    Locked,
    #[error("There's no {0} here.")]
    ItemNotFound(String),
    #[error("You can't take the {0}. It's not going anywhere.")]
    NotPortable(String),
    #[error("There's nothing written on the {0}.")]
    NotReadable(String),
    #[error("You don't have a key.")]
    MissingKey,
    #[error("The password is incorrect.")]
    WrongPassword,
    #[error("The door is locked. You need to unlock it first.")]
    StillLocked,
    #[error("There's no door here.")]
    NoDoor,
    #[error("There's nothing here to fight.")]
    CombatNotActive,
    #[error("You're in combat! You can only 'attack' or 'quit'.")]
    CombatInProgress,
    #[error("room '{0}' is missing from the world")]
    MissingRoom(Id),
}

impl EngineError {
    /// True for errors caused by an inconsistent world rather than by the player.
    pub fn is_internal(&self) -> bool {
        matches!(self, EngineError::MissingRoom(_))
    }
}
