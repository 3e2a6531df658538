use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastleSide, CastlingRights, Color, GameStatus, Piece, Square};

/// Content of one board cell: `None` when empty.
pub type Cell = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Complete game state.
///
/// The board is an owned value: speculative work (self-check rollback,
/// checkmate search, decoding) happens on clones and is committed by
/// assignment only once it is known to be valid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) cells: [[Cell; 8]; 8], // [rank][file]
    pub(crate) turn: Color,
    pub(crate) turn_number: u16,
    pub(crate) special_moves: bool,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_file: Option<usize>,
    pub(crate) status: GameStatus,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position, White to move, all rights available.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            board.cells[0][file] = Some((Color::White, piece));
            board.cells[1][file] = Some((Color::White, Piece::Pawn));
            board.cells[6][file] = Some((Color::Black, Piece::Pawn));
            board.cells[7][file] = Some((Color::Black, piece));
        }
        board.castling_rights = CastlingRights::all();
        board.special_moves = true;
        board
    }

    /// Board with no pieces, no rights and special moves disabled.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            turn: Color::White,
            turn_number: 0,
            special_moves: false,
            castling_rights: CastlingRights::none(),
            en_passant_file: None,
            status: GameStatus::Ongoing,
        }
    }

    /// Side to move
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Number of half-moves played
    #[inline]
    #[must_use]
    pub fn turn_number(&self) -> u16 {
        self.turn_number
    }

    /// Whether castling and en passant are allowed at all
    #[inline]
    #[must_use]
    pub fn special_moves_enabled(&self) -> bool {
        self.special_moves
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// File of a pawn that just advanced two squares, if capturable en passant
    #[inline]
    #[must_use]
    pub fn en_passant_file(&self) -> Option<usize> {
        self.en_passant_file
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Piece and color on a square; off-board squares read as empty
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        if sq.is_valid() {
            self.cells[sq.rank()][sq.file()]
        } else {
            None
        }
    }

    /// Color of the piece on a square, `None` when empty
    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place a piece, replacing whatever stood there. Editing operation for
    /// custom positions; off-board squares are ignored.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        if sq.is_valid() {
            self.cells[sq.rank()][sq.file()] = Some((color, piece));
        }
    }

    /// Remove any piece from a square, returning it.
    pub fn clear_square(&mut self, sq: Square) -> Cell {
        if sq.is_valid() {
            self.cells[sq.rank()][sq.file()].take()
        } else {
            None
        }
    }

    /// Enable or disable castling and en passant for this position.
    pub fn set_special_moves(&mut self, enabled: bool) {
        self.special_moves = enabled;
    }

    /// Location of a color's king (the first found, a1 to h8)
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// All squares holding a given piece of a given color
    pub(crate) fn squares_of(
        &self,
        color: Color,
        piece: Piece,
    ) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.piece_at(sq) == Some((color, piece)))
    }

    /// Drop castling rights whose king or rook is no longer on its home
    /// square. Moving away and capture both clear the right; nothing restores it.
    pub(crate) fn revoke_stale_castling_rights(&mut self) {
        for color in Color::BOTH {
            let rank = color.back_rank();
            let king_home = self.piece_at(Square(rank, 4)) == Some((color, Piece::King));
            for side in CastleSide::BOTH {
                let rook_home =
                    self.piece_at(Square(rank, side.rook_file())) == Some((color, Piece::Rook));
                if !(king_home && rook_home) {
                    self.castling_rights.remove(color, side);
                }
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  ABCDEFGH")?;
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = match self.cells[rank][file] {
                    Some((color, piece)) => piece.to_display_char(color),
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f, " {}", rank + 1)?;
        }
        write!(f, "  ABCDEFGH")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_setup() {
        let board = Board::new();
        assert_eq!(board.piece_at(Square(0, 4)), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(Square(7, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_at(Square(6, 0)), Some((Color::Black, Piece::Pawn)));
        assert!(board.is_empty(Square(3, 3)));
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.turn_number(), 0);
        assert!(board.special_moves_enabled());
        assert_eq!(board.castling_rights(), CastlingRights::all());
        assert_eq!(board.en_passant_file(), None);
        assert_eq!(board.status(), GameStatus::Ongoing);
    }

    #[test]
    fn test_off_board_reads_empty() {
        let board = Board::new();
        assert_eq!(board.piece_at(Square(8, 0)), None);
        assert_eq!(board.color_at(Square(0, 9)), None);
    }

    #[test]
    fn test_editing() {
        let mut board = Board::empty();
        board.set_piece(Square(3, 3), Color::Black, Piece::Knight);
        assert_eq!(board.color_at(Square(3, 3)), Some(Color::Black));
        assert_eq!(
            board.clear_square(Square(3, 3)),
            Some((Color::Black, Piece::Knight))
        );
        assert!(board.is_empty(Square(3, 3)));
    }

    #[test]
    fn test_king_square() {
        let board = Board::new();
        assert_eq!(board.king_square(Color::White), Some(Square(0, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square(7, 4)));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn test_revoke_stale_rights() {
        let mut board = Board::new();
        board.clear_square(Square(0, 7));
        board.clear_square(Square(7, 4));
        board.revoke_stale_castling_rights();
        let rights = board.castling_rights();
        assert!(rights.has(Color::White, CastleSide::Queenside));
        assert!(!rights.has(Color::White, CastleSide::Kingside));
        assert!(!rights.has(Color::Black, CastleSide::Queenside));
        assert!(!rights.has(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn test_display_grid() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "8 rnbqkbnr 8");
        assert_eq!(lines[8], "1 RNBQKBNR 1");
        assert_eq!(lines[4], "5 ........ 5");
    }
}
