//! Checkmate detection and legal move enumeration.
//!
//! Both are exhaustive: every (source, destination) pair of the side is run
//! through the full validation path used by `Board::apply`, so whatever the
//! applier would accept counts as an escape.

use super::{Board, CaptureTag, Color, GameStatus, Move, Piece, Square};

impl Board {
    /// True if `color` is in check and no move of theirs gets out of it.
    ///
    /// Works on a scratch copy with `color` to move; the board itself is
    /// never modified.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        if !self.in_check(color) {
            return false;
        }

        let mut scratch = self.clone();
        scratch.turn = color;
        scratch.status = GameStatus::Ongoing;

        let escapes = scratch
            .candidate_moves()
            .any(|mv| scratch.next_position(mv).is_ok());
        !escapes
    }

    /// Every move the side to move may currently make.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.candidate_moves()
            .filter(|&mv| self.next_position(mv).is_ok())
            .collect()
    }

    /// All move requests worth validating for the side to move.
    ///
    /// A pawn one step from promotion gets one request per capture tag for
    /// each far-rank destination.
    fn candidate_moves(&self) -> impl Iterator<Item = Move> + '_ {
        let color = self.turn;
        Square::all()
            .filter(move |&from| self.color_at(from) == Some(color))
            .flat_map(move |from| {
                let promoting = self.piece_at(from) == Some((color, Piece::Pawn))
                    && from.rank() == color.pawn_penultimate_rank();
                Square::all().flat_map(move |to| {
                    let tags: &'static [CaptureTag] =
                        if promoting && to.rank() == color.pawn_promotion_rank() {
                            &CaptureTag::ALL
                        } else {
                            &[CaptureTag::None]
                        };
                    tags.iter().map(move |&tag| Move::with_tag(from, to, tag))
                })
            })
    }
}
