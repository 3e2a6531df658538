use super::super::{Board, CaptureTag, Color, Move, MoveKind, Piece, PromotionPiece, Square};
use super::deltas;

impl Board {
    pub(super) fn pawn_legality(&self, mv: Move, color: Color) -> Option<MoveKind> {
        let from = mv.from();
        let to = mv.to();
        let forward = color.pawn_direction();

        // Anything reaching the far rank goes through the promotion encoding
        if to.rank() == color.pawn_promotion_rank() {
            if from.rank() != color.pawn_penultimate_rank() {
                return None;
            }
            return self.promotion_legality(mv, color);
        }

        let (dr, df) = deltas(from, to);

        if dr == forward && df == 0 {
            return self.is_empty(to).then_some(MoveKind::Quiet);
        }

        if dr == forward && df.abs() == 1 {
            return match self.color_at(to) {
                Some(other) if other != color => Some(MoveKind::Capture),
                Some(_) => None,
                None => self.en_passant_legality(from, to, color),
            };
        }

        if dr == 2 * forward && df == 0 && from.rank() == color.pawn_start_rank() {
            let skipped = from.offset(forward, 0)?;
            return (self.is_empty(skipped) && self.is_empty(to)).then_some(MoveKind::Quiet);
        }

        None
    }

    /// Destination file picks the piece; the landing square is the source
    /// file shifted by the capture tag and must be empty for a straight push
    /// or hold an enemy for a diagonal one.
    fn promotion_legality(&self, mv: Move, color: Color) -> Option<MoveKind> {
        let piece = PromotionPiece::from_file(mv.to().file())?;
        let landing = mv.promotion_landing()?;
        let fits = match mv.tag() {
            CaptureTag::None => self.is_empty(landing),
            CaptureTag::Left | CaptureTag::Right => {
                matches!(self.color_at(landing), Some(other) if other != color)
            }
        };
        fits.then_some(MoveKind::Promotion(piece))
    }

    fn en_passant_legality(&self, from: Square, to: Square, color: Color) -> Option<MoveKind> {
        if !self.special_moves || self.en_passant_file != Some(to.file()) {
            return None;
        }
        if from.rank() != color.en_passant_rank() {
            return None;
        }
        let passed = Square(from.rank(), to.file());
        (self.piece_at(passed) == Some((color.opponent(), Piece::Pawn)))
            .then_some(MoveKind::EnPassant)
    }
}
