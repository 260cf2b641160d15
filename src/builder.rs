//! Construction of the fixed mansion layout.

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::arena::MansionArena;
use crate::direction::Direction;
use crate::errors::{MansionError, MansionResult};

pub const HALL_DE_ENTRADA: &str = "Hall de Entrada";
pub const SALA_DE_ESTAR: &str = "Sala de Estar";
pub const ESCRITORIO: &str = "Escritorio";
pub const COZINHA: &str = "Cozinha";
pub const BIBLIOTECA: &str = "Biblioteca";
pub const QUARTO_PRINCIPAL: &str = "Quarto Principal";
pub const JARDIM: &str = "Jardim";
pub const DISPENSA: &str = "Dispensa";
pub const VARANDA: &str = "Varanda";
pub const PORAO: &str = "Porao";

/// Wires rooms into a `MansionArena`.
pub struct MansionBuilder {
    mansion: MansionArena,
}

impl Default for MansionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MansionBuilder {
    pub fn new() -> Self {
        Self {
            mansion: MansionArena::new(),
        }
    }

    /// Creates a room with both exits absent. The first room made is the entrance.
    #[instrument(level = "trace", skip(self))]
    pub fn make_room(&mut self, name: &str) -> Index {
        self.mansion.insert_room(name)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, parent: Index, direction: Direction, child: Index) -> MansionResult<()> {
        self.mansion.attach(parent, direction, child)
    }

    /// Hands out the finished mansion after checking that every room hangs off the entrance.
    #[instrument(level = "debug", skip(self))]
    pub fn finish(self) -> MansionResult<MansionArena> {
        if self.mansion.root().is_none() {
            return Err(MansionError::EmptyMansion);
        }
        if let Some(orphan) = self.mansion.unreachable_rooms().into_iter().next() {
            return Err(MansionError::Unreachable(orphan));
        }
        debug!(
            "mansion ready: {} rooms, depth {}, dead ends {:?}",
            self.mansion.len(),
            self.mansion.depth(),
            self.mansion.leaf_names()
        );
        Ok(self.mansion)
    }
}

/// Builds the canonical mansion:
///
/// ```text
/// Hall de Entrada
/// ├─ E: Sala de Estar
/// │  ├─ E: Cozinha
/// │  │  ├─ E: Jardim
/// │  │  └─ D: Dispensa
/// │  │        └─ E: Porao
/// │  └─ D: Biblioteca
/// │        └─ E: Varanda
/// └─ D: Escritorio
///       └─ D: Quarto Principal
/// ```
#[instrument(level = "debug")]
pub fn build() -> MansionResult<MansionArena> {
    let mut builder = MansionBuilder::new();

    let hall = builder.make_room(HALL_DE_ENTRADA);

    let sala_estar = builder.make_room(SALA_DE_ESTAR);
    let escritorio = builder.make_room(ESCRITORIO);
    builder.attach(hall, Direction::Left, sala_estar)?;
    builder.attach(hall, Direction::Right, escritorio)?;

    let cozinha = builder.make_room(COZINHA);
    let biblioteca = builder.make_room(BIBLIOTECA);
    let quarto_principal = builder.make_room(QUARTO_PRINCIPAL);
    builder.attach(sala_estar, Direction::Left, cozinha)?;
    builder.attach(sala_estar, Direction::Right, biblioteca)?;
    builder.attach(escritorio, Direction::Right, quarto_principal)?;

    let jardim = builder.make_room(JARDIM);
    let dispensa = builder.make_room(DISPENSA);
    let varanda = builder.make_room(VARANDA);
    builder.attach(cozinha, Direction::Left, jardim)?;
    builder.attach(cozinha, Direction::Right, dispensa)?;
    builder.attach(biblioteca, Direction::Left, varanda)?;

    let porao = builder.make_room(PORAO);
    builder.attach(dispensa, Direction::Left, porao)?;

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_rooms_when_finishing_then_fails_with_empty_mansion() {
        let result = MansionBuilder::new().finish();
        assert!(matches!(result, Err(MansionError::EmptyMansion)));
    }

    #[test]
    fn given_detached_room_when_finishing_then_names_it() {
        let mut builder = MansionBuilder::new();
        let hall = builder.make_room("Hall");
        let attic = builder.make_room("Sotao");
        let _cellar = builder.make_room("Adega");
        builder.attach(hall, Direction::Left, attic).unwrap();

        let err = builder.finish().unwrap_err();

        assert_eq!(err.to_string(), "room Adega is not reachable from the entrance");
    }

    #[test]
    fn given_made_room_when_inspecting_then_has_no_exits() {
        let mut builder = MansionBuilder::new();
        let hall = builder.make_room(HALL_DE_ENTRADA);
        let mansion = builder.finish().unwrap();

        let room = mansion.get(hall).unwrap();
        assert_eq!(room.name(), HALL_DE_ENTRADA);
        assert!(room.is_leaf());
    }
}
