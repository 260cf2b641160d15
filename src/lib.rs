//! Interactive exploration of a mansion laid out as a binary tree of rooms.
//!
//! [`builder::build`] wires the fixed layout into a [`MansionArena`]; [`navigator::explore`]
//! walks it from the entrance, one `E`/`D` choice at a time, until a room without exits.

pub mod arena;
pub mod builder;
pub mod cli;
pub mod direction;
pub mod errors;
pub mod exitcode;
pub mod input;
pub mod navigator;
pub mod output;
pub mod tree_traits;
pub mod util;

pub use arena::{MansionArena, Room};
pub use direction::Direction;
pub use errors::{MansionError, MansionResult};
pub use navigator::{explore, Exploration, Navigator, Step};
