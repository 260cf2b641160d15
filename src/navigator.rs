//! Cursor-based exploration of the mansion.
//!
//! [`Navigator`] is the pure state machine; [`explore`] drives it from a line-oriented input
//! stream and narrates every state on the output stream.

use std::io::{BufRead, Write};

use generational_arena::Index;
use tracing::{debug, info, instrument, warn};

use crate::arena::{MansionArena, Room};
use crate::direction::Direction;
use crate::errors::{MansionError, MansionResult};
use crate::input::{ChoiceReader, ReadOutcome};
use crate::output;

pub const MSG_INVALID_OPTION: &str = "Opcao invalida. Tente novamente.";
pub const MSG_INVALID_PATH: &str = "Caminho invalido ou nao disponivel. Tente novamente.";
pub const MSG_COMPLETED: &str = "--- EXPLORACAO CONCLUIDA ---";
pub const MSG_NO_MANSION: &str = "A mansao nao pode ser montada.";

/// Outcome of a single move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Cursor moved into the room at this index
    Moved(Index),
    /// No exit in that direction; cursor unchanged
    Blocked(Direction),
    /// Cursor is already in a room without exits
    Finished,
}

/// How an exploration ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exploration {
    Completed { leaf: String, trail: Vec<String> },
    InputClosed { room: String, trail: Vec<String> },
    /// The mansion has no entrance; nothing to explore
    NoMansion,
}

#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    mansion: &'a MansionArena,
    cursor: Index,
    room: &'a Room,
    trail: Vec<Index>,
}

impl<'a> Navigator<'a> {
    /// Places the cursor at the entrance.
    pub fn new(mansion: &'a MansionArena) -> MansionResult<Self> {
        let cursor = mansion.root().ok_or(MansionError::EmptyMansion)?;
        let room = mansion.get(cursor).ok_or(MansionError::UnknownRoom(cursor))?;
        Ok(Self {
            mansion,
            cursor,
            room,
            trail: vec![cursor],
        })
    }

    pub fn current(&self) -> Index {
        self.cursor
    }

    pub fn current_room(&self) -> &'a Room {
        self.room
    }

    pub fn is_finished(&self) -> bool {
        self.room.is_leaf()
    }

    /// Exits of the current room with the name of the room each one leads to.
    pub fn available(&self) -> Vec<(Direction, &'a str)> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                let child = self.room.child(direction)?;
                self.mansion.name(child).map(|name| (direction, name))
            })
            .collect()
    }

    #[instrument(level = "debug", skip(self), fields(from = %self.room))]
    pub fn step(&mut self, direction: Direction) -> MansionResult<Step> {
        if self.is_finished() {
            return Ok(Step::Finished);
        }
        let Some(child) = self.room.child(direction) else {
            debug!("no {} exit", direction);
            return Ok(Step::Blocked(direction));
        };
        self.room = self
            .mansion
            .get(child)
            .ok_or(MansionError::UnknownRoom(child))?;
        self.cursor = child;
        self.trail.push(child);
        debug!("moved to {}", self.room);
        Ok(Step::Moved(child))
    }

    /// Rooms visited so far, starting at the entrance.
    pub fn trail(&self) -> &[Index] {
        &self.trail
    }

    pub fn trail_names(&self) -> Vec<String> {
        self.trail
            .iter()
            .filter_map(|&idx| self.mansion.name(idx))
            .map(str::to_string)
            .collect()
    }
}

/// Runs the interactive exploration until a room without exits is reached.
///
/// Rejected input never changes the cursor: the current room is announced again and the
/// prompt repeats. Input that is not valid UTF-8 is dropped through the end of its line.
/// End of input stops the exploration with [`Exploration::InputClosed`] instead of retrying.
/// A mansion without entrance is reported on the output and yields [`Exploration::NoMansion`].
#[instrument(level = "debug", skip_all)]
pub fn explore<R: BufRead, W: Write>(
    mansion: &MansionArena,
    input: R,
    out: &mut W,
) -> MansionResult<Exploration> {
    if mansion.root().is_none() {
        output::warning(out, MSG_NO_MANSION)?;
        warn!("mansion has no entrance");
        return Ok(Exploration::NoMansion);
    }
    let mut navigator = Navigator::new(mansion)?;
    let mut reader = ChoiceReader::new(input);

    loop {
        let room = navigator.current_room();
        output::room(out, room.name())?;

        if navigator.is_finished() {
            let trail = navigator.trail_names();
            writeln!(out)?;
            output::header(out, MSG_COMPLETED)?;
            output::success(
                out,
                &format!(
                    "Voce chegou a um comodo que nao possui saidas (No-Folha): {}",
                    room.name()
                ),
            )?;
            output::detail(out, &format!("Caminho percorrido: {}", trail.join(" -> ")))?;
            info!("exploration completed at {}", room);
            return Ok(Exploration::Completed {
                leaf: room.name().to_string(),
                trail,
            });
        }

        output::info(out, "Caminhos disponiveis:")?;
        for (direction, target) in navigator.available() {
            output::choice(out, direction.key(), direction.label(), target)?;
        }
        output::prompt(out, "Escolha (e/d):")?;

        let choice = match reader.read_choice()? {
            ReadOutcome::Char(c) => c,
            ReadOutcome::Malformed => {
                reader.discard_line()?;
                warn!("malformed input at {}", room);
                writeln!(out)?;
                output::warning(out, MSG_INVALID_OPTION)?;
                continue;
            }
            ReadOutcome::Eof => {
                writeln!(out)?;
                output::warning(
                    out,
                    &format!("Entrada encerrada. Exploracao interrompida em: {}", room.name()),
                )?;
                warn!("input closed at {}", room);
                return Ok(Exploration::InputClosed {
                    room: room.name().to_string(),
                    trail: navigator.trail_names(),
                });
            }
        };
        writeln!(out)?;

        let Some(direction) = Direction::from_key(choice) else {
            debug!("rejected key {:?}", choice);
            output::warning(out, MSG_INVALID_OPTION)?;
            continue;
        };

        match navigator.step(direction)? {
            Step::Moved(_) => {}
            Step::Blocked(_) | Step::Finished => output::warning(out, MSG_INVALID_PATH)?,
        }
    }
}
