use super::super::{Board, CastleSide, Color, Move, MoveKind, Piece, Square};
use super::deltas;

impl Board {
    pub(super) fn king_legality(&self, mv: Move, color: Color) -> Option<MoveKind> {
        if let Some(side) = self.castle_side(mv, color) {
            return self.castle_legality(color, side);
        }

        let (dr, df) = deltas(mv.from(), mv.to());
        if dr.abs() > 1 || df.abs() > 1 || (dr == 0 && df == 0) {
            return None;
        }
        if self.is_attacked_by(mv.to(), color.opponent()) {
            return None;
        }
        self.landing_kind(color, mv.to())
    }

    /// Side a king-onto-own-rook request castles towards, if it has that shape.
    fn castle_side(&self, mv: Move, color: Color) -> Option<CastleSide> {
        let rank = color.back_rank();
        if mv.from() != Square(rank, 4) || mv.to().rank() != rank {
            return None;
        }
        if self.piece_at(mv.to()) != Some((color, Piece::Rook)) {
            return None;
        }
        CastleSide::BOTH
            .into_iter()
            .find(|side| side.rook_file() == mv.to().file())
    }

    /// The king's square and every square between king and rook must be
    /// empty (except the king itself) and not attacked by the opponent.
    fn castle_legality(&self, color: Color, side: CastleSide) -> Option<MoveKind> {
        if !self.special_moves || !self.castling_rights.has(color, side) {
            return None;
        }

        let rank = color.back_rank();
        let enemy = color.opponent();
        if side.between_files().any(|file| !self.is_empty(Square(rank, file))) {
            return None;
        }
        if self.is_attacked_by(Square(rank, 4), enemy) {
            return None;
        }
        if side
            .between_files()
            .any(|file| self.is_attacked_by(Square(rank, file), enemy))
        {
            return None;
        }

        Some(MoveKind::Castle(side))
    }
}
