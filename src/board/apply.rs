//! Move application.
//!
//! A move is validated and executed on a clone of the board. The clone is
//! committed only after the mover's king is known to be safe, so a rejected
//! move never changes the caller's board.

use log::{debug, info, trace};

use super::error::{MoveError, NotationError};
use super::{Applied, Board, CaptureTag, Color, GameStatus, Move, MoveKind, Piece, Square};

impl Board {
    /// Apply a move for the side to move.
    ///
    /// On success the turn passes to the opponent, the ply counter advances,
    /// and the opponent is tested for checkmate; a mate sets the game result
    /// and is reported through `Applied::status`.
    pub fn apply(&mut self, mv: Move) -> Result<Applied, MoveError> {
        let mover = self.turn;
        let kind = match self.play(mv) {
            Ok(kind) => kind,
            Err(err) => {
                debug!("rejected {mover} move: {err}");
                return Err(err);
            }
        };

        if self.is_checkmate(mover.opponent()) {
            self.status = GameStatus::win_for(mover);
            info!("{mover} mates after {mv} on ply {}", self.turn_number);
        }

        Ok(Applied {
            kind,
            status: self.status,
        })
    }

    /// Parse notation for the side to move and apply the resulting move.
    pub fn apply_notation(&mut self, text: &str) -> Result<Applied, NotationError> {
        let (mv, _) = self.parse_move(text)?;
        Ok(self.apply(mv)?)
    }

    /// Validate and commit a move without the checkmate test.
    pub(crate) fn play(&mut self, mv: Move) -> Result<MoveKind, MoveError> {
        let (kind, next) = self.next_position(mv)?;
        *self = next;
        trace!("played {mv} as {kind:?}, ply {}", self.turn_number);
        Ok(kind)
    }

    /// Board after `mv`, or the reason it cannot be played. `self` is untouched.
    pub(crate) fn next_position(&self, mv: Move) -> Result<(MoveKind, Board), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver {
                status: self.status,
            });
        }
        if !mv.from().is_valid() || !mv.to().is_valid() {
            return Err(MoveError::OutOfBounds { mv });
        }

        let (color, piece) = self
            .piece_at(mv.from())
            .ok_or(MoveError::EmptySquare { square: mv.from() })?;
        if color != self.turn {
            return Err(MoveError::WrongTurn { square: mv.from() });
        }

        let kind = self.legality(mv).ok_or(MoveError::Illegal { mv })?;

        let mut next = self.clone();
        next.execute(mv, color, piece, kind)?;

        // Checked after the fact, including the king's final square after castling
        if next.in_check(color) {
            return Err(MoveError::SelfCheck { mv });
        }

        next.turn = color.opponent();
        next.turn_number = next.turn_number.saturating_add(1);
        Ok((kind, next))
    }

    /// Move pieces and update bookkeeping for an already classified move.
    fn execute(
        &mut self,
        mv: Move,
        color: Color,
        piece: Piece,
        kind: MoveKind,
    ) -> Result<(), MoveError> {
        let from = mv.from();
        let to = mv.to();

        self.clear_square(from);
        self.en_passant_file = None;

        match kind {
            MoveKind::EnPassant => {
                // The passed pawn sits beside the capturer, not on the destination
                self.clear_square(Square(from.rank(), to.file()));
                self.set_piece(to, color, piece);
            }
            MoveKind::Promotion(promoted) => {
                let landing = mv
                    .promotion_landing()
                    .ok_or(MoveError::PromotionMismatch { mv })?;
                let fits = match mv.tag() {
                    CaptureTag::None => self.is_empty(landing),
                    CaptureTag::Left | CaptureTag::Right => {
                        matches!(self.color_at(landing), Some(other) if other != color)
                    }
                };
                if !fits {
                    return Err(MoveError::PromotionMismatch { mv });
                }
                self.set_piece(landing, color, promoted.piece());
            }
            MoveKind::Castle(side) => {
                let rank = color.back_rank();
                self.clear_square(to);
                self.set_piece(Square(rank, side.king_target_file()), color, Piece::King);
                self.set_piece(Square(rank, side.rook_target_file()), color, Piece::Rook);
                self.castling_rights.remove_color(color);
            }
            MoveKind::Quiet | MoveKind::Capture => {
                self.set_piece(to, color, piece);
                if piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
                    self.en_passant_file = Some(from.file());
                }
            }
        }

        if piece == Piece::King {
            self.castling_rights.remove_color(color);
        }
        self.revoke_stale_castling_rights();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, CastleSide, PromotionPiece};

    #[test]
    fn test_quiet_move_flips_turn() {
        let mut board = Board::new();
        let applied = board.apply(Move::new(Square(1, 4), Square(3, 4))).unwrap();
        assert_eq!(applied.kind, MoveKind::Quiet);
        assert_eq!(applied.code(), 1);
        assert_eq!(board.turn(), Color::Black);
        assert_eq!(board.turn_number(), 1);
        assert_eq!(board.en_passant_file(), Some(4));
        assert!(board.is_empty(Square(1, 4)));
        assert_eq!(board.piece_at(Square(3, 4)), Some((Color::White, Piece::Pawn)));
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let mut board = Board::new();
        let before = board.clone();
        let err = board.apply(Move::new(Square(6, 4), Square(4, 4))).unwrap_err();
        assert_eq!(err, MoveError::WrongTurn { square: Square(6, 4) });
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_and_out_of_bounds() {
        let mut board = Board::new();
        assert!(matches!(
            board.apply(Move::new(Square(3, 3), Square(4, 3))),
            Err(MoveError::EmptySquare { .. })
        ));
        assert!(matches!(
            board.apply(Move::new(Square(1, 0), Square(9, 0))),
            Err(MoveError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_self_check_rolls_back() {
        // Bishop pinned against the king by a rook
        let mut board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(1, 4), Color::White, Piece::Bishop)
            .piece(Square(7, 4), Color::Black, Piece::Rook)
            .piece(Square(7, 0), Color::Black, Piece::King)
            .build();
        let before = board.clone();
        let mv = Move::new(Square(1, 4), Square(2, 3));
        assert_eq!(board.apply(mv), Err(MoveError::SelfCheck { mv }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_king_cannot_retreat_along_check_ray() {
        let mut board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(0, 0), Color::Black, Piece::Rook)
            .piece(Square(7, 7), Color::Black, Piece::King)
            .build();
        let mv = Move::new(Square(0, 4), Square(0, 5));
        assert_eq!(board.apply(mv), Err(MoveError::SelfCheck { mv }));
        assert!(board.apply(Move::new(Square(0, 4), Square(1, 4))).is_ok());
    }

    #[test]
    fn test_castle_relocates_and_clears_rights() {
        let mut board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(0, 7), Color::White, Piece::Rook)
            .piece(Square(0, 0), Color::White, Piece::Rook)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .all_castling_rights()
            .special_moves(true)
            .build();
        let applied = board.apply(Move::castle(0, CastleSide::Kingside)).unwrap();
        assert_eq!(applied.code(), 7);
        assert_eq!(board.piece_at(Square(0, 6)), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(Square(0, 5)), Some((Color::White, Piece::Rook)));
        assert!(board.is_empty(Square(0, 7)));
        assert!(board.is_empty(Square(0, 4)));
        assert!(!board.castling_rights().has(Color::White, CastleSide::Queenside));
        assert!(!board.castling_rights().has(Color::White, CastleSide::Kingside));
    }

    #[test]
    fn test_rook_move_clears_its_side_only() {
        let mut board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(0, 7), Color::White, Piece::Rook)
            .piece(Square(0, 0), Color::White, Piece::Rook)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .all_castling_rights()
            .special_moves(true)
            .build();
        board.apply(Move::new(Square(0, 7), Square(3, 7))).unwrap();
        assert!(!board.castling_rights().has(Color::White, CastleSide::Kingside));
        assert!(board.castling_rights().has(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn test_capturing_home_rook_clears_opponent_right() {
        let mut board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .piece(Square(7, 7), Color::Black, Piece::Rook)
            .piece(Square(1, 7), Color::White, Piece::Rook)
            .castle_kingside(Color::Black)
            .special_moves(true)
            .build();
        board.apply(Move::new(Square(1, 7), Square(7, 7))).unwrap();
        assert!(!board.castling_rights().has(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn test_en_passant_window_closes() {
        let mut board = Board::new();
        board.apply(Move::new(Square(1, 4), Square(3, 4))).unwrap();
        assert_eq!(board.en_passant_file(), Some(4));
        board.apply(Move::new(Square(7, 6), Square(5, 5))).unwrap();
        assert_eq!(board.en_passant_file(), None);
    }

    #[test]
    fn test_promotion_places_new_piece() {
        let mut board = BoardBuilder::new()
            .piece(Square(6, 0), Color::White, Piece::Pawn)
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(4, 7), Color::Black, Piece::King)
            .build();
        let mv = Move::promotion(Square(6, 0), PromotionPiece::Knight, CaptureTag::None).unwrap();
        let applied = board.apply(mv).unwrap();
        assert_eq!(applied.code(), 9);
        assert_eq!(board.piece_at(Square(7, 0)), Some((Color::White, Piece::Knight)));
        assert!(board.is_empty(Square(6, 0)));
        // The selector square is not touched
        assert!(board.is_empty(Square(7, 1)));
    }

    #[test]
    fn test_promotion_capture_tag_must_match() {
        let mut board = BoardBuilder::new()
            .piece(Square(6, 3), Color::White, Piece::Pawn)
            .piece(Square(7, 4), Color::Black, Piece::Rook)
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(4, 0), Color::Black, Piece::King)
            .build();
        let before = board.clone();
        let wrong = Move::promotion(Square(6, 3), PromotionPiece::Queen, CaptureTag::Left).unwrap();
        assert!(board.apply(wrong).is_err());
        assert_eq!(board, before);

        let right =
            Move::promotion(Square(6, 3), PromotionPiece::Queen, CaptureTag::Right).unwrap();
        assert_eq!(board.apply(right).unwrap().code(), 11);
        assert_eq!(board.piece_at(Square(7, 4)), Some((Color::White, Piece::Queen)));
        assert!(board.is_empty(Square(7, 3)));
    }

    #[test]
    fn test_terminal_state_refuses_moves() {
        let mut board = Board::new();
        board.status = GameStatus::Draw;
        let err = board.apply(Move::new(Square(1, 4), Square(3, 4))).unwrap_err();
        assert_eq!(err, MoveError::GameOver { status: GameStatus::Draw });
    }
}
