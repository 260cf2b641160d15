//! Domain-level errors for building and exploring the mansion

use generational_arena::Index;
use thiserror::Error;

use crate::direction::Direction;

#[derive(Error, Debug)]
pub enum MansionError {
    #[error("room {parent} already has a {direction} exit")]
    SlotOccupied { parent: String, direction: Direction },

    #[error("room {0} is already attached to a parent")]
    AlreadyAttached(String),

    #[error("attaching room {0} would create a cycle")]
    Cycle(String),

    #[error("room {0} is not reachable from the entrance")]
    Unreachable(String),

    #[error("unknown room handle: {0:?}")]
    UnknownRoom(Index),

    #[error("mansion has no entrance")]
    EmptyMansion,

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type MansionResult<T> = Result<T, MansionError>;
