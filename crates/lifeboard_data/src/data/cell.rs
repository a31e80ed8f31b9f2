use serde::{Deserialize, Serialize};

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    #[must_use]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Character used when the board is printed as text.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Cell::Alive => 'o',
            Cell::Dead => ' ',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}
