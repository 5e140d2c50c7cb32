use serde::Serialize;

/// One grid cell: a placeholder or a written character.
///
/// Serialized as `null` / `"X"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "Option<char>")]
pub enum Cell {
    #[default]
    Empty,
    Filled(char),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_char(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Filled(c) => Some(c),
        }
    }

    /// The character to draw for this cell, `placeholder` if it was never written.
    pub fn display(self, placeholder: char) -> char {
        self.as_char().unwrap_or(placeholder)
    }

    /// Parse a rendered cell back; `placeholder` maps to [`Cell::Empty`].
    pub fn parse(c: char, placeholder: Option<char>) -> Self {
        if Some(c) == placeholder {
            Cell::Empty
        } else {
            Cell::Filled(c)
        }
    }
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        Cell::Filled(c)
    }
}

impl From<Cell> for Option<char> {
    fn from(cell: Cell) -> Self {
        cell.as_char()
    }
}
