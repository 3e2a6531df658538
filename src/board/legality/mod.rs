//! Move legality evaluation.
//!
//! `Board::legality` classifies a single move request against the movement
//! rules of the piece on its source square. It does not look at whose turn
//! it is and does not check whether the mover's own king ends up in check:
//! the applier enforces both.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, MoveKind, Piece, Square};

impl Board {
    /// Classify a move, `None` if it is illegal.
    #[must_use]
    pub fn legality(&self, mv: Move) -> Option<MoveKind> {
        if !mv.to().is_valid() || !mv.from().is_valid() {
            return None;
        }

        let (color, piece) = self.piece_at(mv.from())?;
        match piece {
            Piece::Pawn => self.pawn_legality(mv, color),
            Piece::Knight => self.knight_legality(mv, color),
            Piece::King => self.king_legality(mv, color),
            Piece::Rook | Piece::Bishop | Piece::Queen => self.slider_legality(mv, color, piece),
        }
    }

    /// Quiet onto an empty square, capture onto an enemy, illegal onto a friend.
    pub(super) fn landing_kind(&self, color: Color, to: Square) -> Option<MoveKind> {
        match self.color_at(to) {
            None => Some(MoveKind::Quiet),
            Some(other) if other != color => Some(MoveKind::Capture),
            Some(_) => None,
        }
    }
}

/// Rank and file distance between two squares as signed deltas.
#[inline]
fn deltas(from: Square, to: Square) -> (isize, isize) {
    (
        to.rank() as isize - from.rank() as isize,
        to.file() as isize - from.file() as isize,
    )
}
