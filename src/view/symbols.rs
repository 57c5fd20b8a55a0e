//! Display symbols for rendering boards.

use crate::core::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// Characters used when drawing marks and empty cells.
///
/// Serializable so a host application can keep it in its own config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbols {
    pub x: char,
    pub o: char,
    pub empty: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            x: 'X',
            o: 'O',
            empty: '.',
        }
    }
}

impl Symbols {
    pub fn mark(&self, mark: Mark) -> char {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    pub fn cell(&self, cell: Cell) -> char {
        cell.mark().map_or(self.empty, |m| self.mark(m))
    }

    /// True when all three symbols can be told apart.
    pub fn is_distinct(&self) -> bool {
        self.x != self.o && self.x != self.empty && self.o != self.empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_symbols_are_distinct() {
        assert!(Symbols::default().is_distinct());
    }

    #[test]
    fn clashing_symbols_are_detected() {
        let symbols = Symbols {
            x: '#',
            o: '#',
            empty: ' ',
        };
        assert!(!symbols.is_distinct());
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let symbols: Symbols = serde_json::from_str(r#"{"empty":"_"}"#).unwrap();
        assert_eq!(symbols.x, 'X');
        assert_eq!(symbols.o, 'O');
        assert_eq!(symbols.cell(Cell::Empty), '_');
        assert_eq!(symbols.cell(Cell::Occupied(Mark::O)), 'O');
    }
}
