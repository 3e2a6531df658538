//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Piece {
    /// All piece kinds in persisted order (pawn first, king last)
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
    ];

    /// Parse a piece from its letter (p, r, n, b, q, k), case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'r' => Some(Piece::Rook),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Rook => 'r',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_display_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Kind identifier used by the persisted format (1 = pawn .. 6 = king).
    #[inline]
    #[must_use]
    pub(crate) const fn wire_id(self) -> u8 {
        match self {
            Piece::Pawn => 1,
            Piece::Rook => 2,
            Piece::Knight => 3,
            Piece::Bishop => 4,
            Piece::Queen => 5,
            Piece::King => 6,
        }
    }

    #[must_use]
    pub(crate) const fn from_wire_id(id: u8) -> Option<Piece> {
        match id {
            1 => Some(Piece::Pawn),
            2 => Some(Piece::Rook),
            3 => Some(Piece::Knight),
            4 => Some(Piece::Bishop),
            5 => Some(Piece::Queen),
            6 => Some(Piece::King),
            _ => None,
        }
    }

    /// Returns true if this piece moves along diagonals (Bishop, Queen)
    #[inline]
    #[must_use]
    pub const fn moves_diagonally(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Queen)
    }

    /// Returns true if this piece moves along ranks/files (Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn moves_straight(self) -> bool {
        matches!(self, Piece::Rook | Piece::Queen)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Pawn => "pawn",
            Piece::Rook => "rook",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Queen => "queen",
            Piece::King => "king",
        };
        f.write_str(name)
    }
}

/// Piece a pawn may promote to.
///
/// Promotion moves select the piece through their destination file, in
/// declaration order: a rook, b knight, c bishop, d queen.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PromotionPiece {
    Rook,
    Knight,
    Bishop,
    Queen,
}

impl PromotionPiece {
    /// All choices, indexed by the selecting destination file
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Rook,
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Queen,
    ];

    /// Choice selected by a promotion move's destination file
    #[inline]
    #[must_use]
    pub fn from_file(file: usize) -> Option<Self> {
        Self::ALL.get(file).copied()
    }

    /// Destination file that selects this choice
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        match self {
            PromotionPiece::Rook => 0,
            PromotionPiece::Knight => 1,
            PromotionPiece::Bishop => 2,
            PromotionPiece::Queen => 3,
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        match self {
            PromotionPiece::Rook => Piece::Rook,
            PromotionPiece::Knight => Piece::Knight,
            PromotionPiece::Bishop => Piece::Bishop,
            PromotionPiece::Queen => Piece::Queen,
        }
    }

    /// Pawns and kings are not promotion choices
    #[must_use]
    pub const fn from_piece(piece: Piece) -> Option<Self> {
        match piece {
            Piece::Rook => Some(PromotionPiece::Rook),
            Piece::Knight => Some(PromotionPiece::Knight),
            Piece::Bishop => Some(PromotionPiece::Bishop),
            Piece::Queen => Some(PromotionPiece::Queen),
            Piece::Pawn | Piece::King => None,
        }
    }
}

impl From<PromotionPiece> for Piece {
    fn from(promoted: PromotionPiece) -> Self {
        promoted.piece()
    }
}

impl fmt::Display for PromotionPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.piece(), f)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors (White first)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank a pawn promotes from (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_penultimate_rank(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Rank a pawn must stand on to capture en passant (4 for White, 3 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn en_passant_rank(self) -> usize {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_file_mapping() {
        assert_eq!(PromotionPiece::from_file(0), Some(PromotionPiece::Rook));
        assert_eq!(PromotionPiece::from_file(1), Some(PromotionPiece::Knight));
        assert_eq!(PromotionPiece::from_file(2), Some(PromotionPiece::Bishop));
        assert_eq!(PromotionPiece::from_file(3), Some(PromotionPiece::Queen));
        assert_eq!(PromotionPiece::from_file(4), None);
        for promoted in PromotionPiece::ALL {
            assert_eq!(PromotionPiece::from_file(promoted.file()), Some(promoted));
            assert_eq!(PromotionPiece::from_piece(promoted.piece()), Some(promoted));
        }
    }

    #[test]
    fn test_pawn_and_king_are_not_promotion_choices() {
        assert_eq!(PromotionPiece::from_piece(Piece::Pawn), None);
        assert_eq!(PromotionPiece::from_piece(Piece::King), None);
        assert_eq!(Piece::from(PromotionPiece::Knight), Piece::Knight);
    }

    #[test]
    fn test_wire_ids_are_distinct() {
        for piece in Piece::ALL {
            assert_eq!(Piece::from_wire_id(piece.wire_id()), Some(piece));
        }
        assert_eq!(Piece::from_wire_id(0), None);
        assert_eq!(Piece::from_wire_id(7), None);
    }

    #[test]
    fn test_display_char_case() {
        assert_eq!(Piece::Knight.to_display_char(Color::White), 'N');
        assert_eq!(Piece::Knight.to_display_char(Color::Black), 'n');
        assert_eq!(Piece::from_char('Q'), Some(Piece::Queen));
        assert_eq!(Piece::from_char('x'), None);
    }
}
