//! Attacked-square detection.
//!
//! Built on the legality evaluator: a square is attacked by a piece if that
//! piece could move there (ignoring whose turn it is). Kings and pawns are
//! answered directly:
//! - a king attacks its eight neighbours. This short-circuit is load-bearing:
//!   king-move legality asks whether the destination is attacked, so routing
//!   enemy kings back through the evaluator would recurse without end.
//! - a pawn attacks its two forward diagonals; a pawn push never attacks.

use super::{Board, Color, Move, MoveKind, Piece, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Set of colors attacking a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Attackers {
    white: bool,
    black: bool,
}

impl Attackers {
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Attackers {
            white: false,
            black: false,
        }
    }

    /// True if `color` attacks the square
    #[inline]
    #[must_use]
    pub const fn contains(self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.white && !self.black
    }

    #[inline]
    pub fn insert(&mut self, color: Color) {
        match color {
            Color::White => self.white = true,
            Color::Black => self.black = true,
        }
    }
}

impl Board {
    /// Colors currently threatening `target`.
    #[must_use]
    pub fn attackers_of(&self, target: Square) -> Attackers {
        let mut attackers = Attackers::none();
        if !target.is_valid() {
            return attackers;
        }

        for from in Square::all() {
            if from == target {
                continue;
            }
            let Some((color, piece)) = self.piece_at(from) else {
                continue;
            };
            if attackers.contains(color) {
                continue;
            }
            if self.piece_attacks(from, color, piece, target) {
                attackers.insert(color);
            }
        }

        attackers
    }

    /// True if `color` has a piece attacking `target`
    #[inline]
    #[must_use]
    pub fn is_attacked_by(&self, target: Square, color: Color) -> bool {
        self.attackers_of(target).contains(color)
    }

    /// True if `color`'s king stands on an attacked square.
    ///
    /// A side without a king is never in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_attacked_by(king, color.opponent()),
            None => false,
        }
    }

    fn piece_attacks(&self, from: Square, color: Color, piece: Piece, target: Square) -> bool {
        match piece {
            Piece::King => KING_OFFSETS
                .iter()
                .any(|&(dr, df)| from.offset(dr, df) == Some(target)),
            Piece::Pawn => {
                let dr = color.pawn_direction();
                from.offset(dr, -1) == Some(target) || from.offset(dr, 1) == Some(target)
            }
            _ => matches!(
                self.legality(Move::new(from, target)),
                Some(MoveKind::Quiet | MoveKind::Capture)
            ),
        }
    }
}
