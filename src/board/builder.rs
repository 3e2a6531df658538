//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece instead of replaying moves or
//! decoding a saved game.
//!
//! # Example
//! ```
//! use cheds::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.king_square(Color::Black), Some(Square(7, 4)));
//! ```

use super::{Board, CastleSide, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant_file: Option<usize>,
    special_moves: bool,
    turn_number: u16,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a builder for an empty board with special moves disabled.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant_file: None,
            special_moves: false,
            turn_number: 0,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Board::new();
        let mut builder = Self::new();
        for sq in Square::all() {
            if let Some((color, piece)) = start.piece_at(sq) {
                builder.pieces.push((sq, color, piece));
            }
        }
        builder.castling = CastlingRights::all();
        builder.special_moves = true;
        builder
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling.set(color, CastleSide::Kingside);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling.set(color, CastleSide::Queenside);
        self
    }

    /// Enable all castling rights.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::all();
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    /// Mark the file of a pawn that just made a double step.
    #[must_use]
    pub const fn en_passant_file(mut self, file: usize) -> Self {
        self.en_passant_file = Some(file);
        self
    }

    /// Clear the en passant file.
    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant_file = None;
        self
    }

    /// Allow or forbid castling and en passant.
    #[must_use]
    pub const fn special_moves(mut self, enabled: bool) -> Self {
        self.special_moves = enabled;
        self
    }

    /// Set the half-move counter.
    #[must_use]
    pub const fn turn_number(mut self, turn_number: u16) -> Self {
        self.turn_number = turn_number;
        self
    }

    /// Build the board.
    ///
    /// Castling rights whose king or rook is not on its home square are
    /// dropped, and an en passant file outside the board is ignored.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }

        board.turn = self.side_to_move;
        board.turn_number = self.turn_number;
        board.special_moves = self.special_moves;
        board.castling_rights = self.castling;
        board.en_passant_file = self.en_passant_file.filter(|&file| file < 8);
        board.revoke_stale_castling_rights();

        board
    }
}
