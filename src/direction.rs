//! The two navigation commands and their keyboard spellings

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Maps a typed key to a direction, case-insensitively.
    ///
    /// `E`/`e` (Esquerda) is left, `D`/`d` (Direita) is right. Anything else is `None`.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'E' | 'e' => Some(Direction::Left),
            'D' | 'd' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            Direction::Left => 'E',
            Direction::Right => 'D',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "Esquerda",
            Direction::Right => "Direita",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}
