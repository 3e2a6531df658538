//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use cheds::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.turn(), Color::White);
//! ```

pub use super::{
    Applied, Board, BoardBuilder, Color, DecodeError, GameStatus, Move, MoveError, MoveKind,
    NotationError, Piece, PromotionPiece, Square,
};
