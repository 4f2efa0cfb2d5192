//! Piece definitions
//!
//! Pieces are opaque tokens: a kind tag for display plus a unique id
//! handed out by the generator. There is no geometry here.

use ratatui::style::Color;
use std::fmt;

/// The four piece kinds the generator can hand out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I, // Cyan - long bar
    O, // Yellow - square
    T, // Purple - T-shape
    L, // Orange - L-shape
}

impl PieceKind {
    /// Get the color for this kind
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::T => Color::Magenta,
            PieceKind::L => Color::Rgb(255, 165, 0), // Orange
        }
    }

    /// One-letter tag used in piece tokens and logs
    pub fn tag(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }

    /// All kinds, for uniform draws
    pub fn all() -> [PieceKind; 4] {
        [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L]
    }
}

/// A piece in the inventory
///
/// Immutable once created. Ids are unique for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.tag(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_token() {
        let piece = Piece {
            kind: PieceKind::T,
            id: 3,
        };
        assert_eq!(piece.to_string(), "[T 3]");
    }

    #[test]
    fn test_all_kinds_distinct() {
        let kinds = PieceKind::all();
        for (i, a) in kinds.iter().enumerate() {
            for b in kinds.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
