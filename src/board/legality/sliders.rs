use super::super::{Board, Color, Move, MoveKind, Piece};
use super::deltas;

impl Board {
    /// Rooks and bishops move along their lines; a queen may use either.
    pub(super) fn slider_legality(
        &self,
        mv: Move,
        color: Color,
        piece: Piece,
    ) -> Option<MoveKind> {
        let (dr, df) = deltas(mv.from(), mv.to());

        let straight = (dr == 0) != (df == 0);
        let diagonal = dr != 0 && dr.abs() == df.abs();
        let on_line =
            (straight && piece.moves_straight()) || (diagonal && piece.moves_diagonally());
        if !on_line {
            return None;
        }

        let step = (dr.signum(), df.signum());
        let mut sq = mv.from().offset(step.0, step.1)?;
        while sq != mv.to() {
            if !self.is_empty(sq) {
                return None;
            }
            sq = sq.offset(step.0, step.1)?;
        }

        self.landing_kind(color, mv.to())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color, Move, MoveKind, Piece, Square};

    fn lone(piece: Piece, at: Square) -> Board {
        let mut board = Board::empty();
        board.set_piece(at, Color::White, piece);
        board
    }

    #[test]
    fn test_rook_lines() {
        let board = lone(Piece::Rook, Square(3, 3));
        assert_eq!(board.legality(Move::new(Square(3, 3), Square(3, 7))), Some(MoveKind::Quiet));
        assert_eq!(board.legality(Move::new(Square(3, 3), Square(0, 3))), Some(MoveKind::Quiet));
        assert_eq!(board.legality(Move::new(Square(3, 3), Square(5, 5))), None);
        assert_eq!(board.legality(Move::new(Square(3, 3), Square(3, 3))), None);
    }

    #[test]
    fn test_bishop_lines() {
        let board = lone(Piece::Bishop, Square(3, 3));
        assert_eq!(board.legality(Move::new(Square(3, 3), Square(0, 0))), Some(MoveKind::Quiet));
        assert_eq!(board.legality(Move::new(Square(3, 3), Square(6, 0))), Some(MoveKind::Quiet));
        assert_eq!(board.legality(Move::new(Square(3, 3), Square(3, 6))), None);
        assert_eq!(board.legality(Move::new(Square(3, 3), Square(4, 5))), None);
    }

    #[test]
    fn test_queen_uses_both_lines() {
        let board = lone(Piece::Queen, Square(0, 3));
        assert_eq!(board.legality(Move::new(Square(0, 3), Square(7, 3))), Some(MoveKind::Quiet));
        assert_eq!(board.legality(Move::new(Square(0, 3), Square(4, 7))), Some(MoveKind::Quiet));
        assert_eq!(board.legality(Move::new(Square(0, 3), Square(2, 4))), None);
    }

    #[test]
    fn test_slider_collision() {
        let mut board = lone(Piece::Queen, Square(0, 0));
        board.set_piece(Square(3, 3), Color::Black, Piece::Pawn);
        board.set_piece(Square(0, 4), Color::White, Piece::Pawn);
        assert_eq!(board.legality(Move::new(Square(0, 0), Square(3, 3))), Some(MoveKind::Capture));
        assert_eq!(board.legality(Move::new(Square(0, 0), Square(5, 5))), None);
        assert_eq!(board.legality(Move::new(Square(0, 0), Square(0, 4))), None);
        assert_eq!(board.legality(Move::new(Square(0, 0), Square(0, 6))), None);
        assert_eq!(board.legality(Move::new(Square(0, 0), Square(0, 3))), Some(MoveKind::Quiet));
    }

    #[test]
    fn test_blocked_in_starting_position() {
        let board = Board::new();
        assert_eq!(board.legality(Move::new(Square(0, 0), Square(2, 0))), None);
        assert_eq!(board.legality(Move::new(Square(0, 2), Square(2, 4))), None);
        assert_eq!(board.legality(Move::new(Square(0, 3), Square(1, 3))), None);
    }
}
